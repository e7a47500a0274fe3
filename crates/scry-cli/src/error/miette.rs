//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use ::miette::Report;
use scry_analysis::AnalysisError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Analysis(e) => analysis_error_to_miette(e),
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
        CliError::FileNotFound(path) => ::miette::miette!(
            help = "Check the path and try again",
            "File not found: {}",
            path.display()
        ),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert AnalysisError to miette Report
pub fn analysis_error_to_miette(err: AnalysisError) -> Report {
    match err {
        AnalysisError::RootNotFound(path) => ::miette::miette!(
            help = "Pass an existing directory or file with --path",
            "Analysis root not found: {}",
            path.display()
        ),
        AnalysisError::InvalidPattern { pattern, message } => ::miette::miette!(
            help = "Include patterns are substrings or globs such as '*.py' or 'src/**/*.ts'",
            "Invalid include pattern '{}': {}",
            pattern,
            message
        ),
        other => ::miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_root_not_found_report() {
        let report = cli_error_to_miette(CliError::Analysis(AnalysisError::RootNotFound(
            PathBuf::from("/nowhere"),
        )));
        assert!(report.to_string().contains("/nowhere"));
        assert!(report.help().is_some());
    }

    #[test]
    fn test_custom_report() {
        let report = cli_error_to_miette(CliError::Custom("boom".to_string()));
        assert_eq!(report.to_string(), "boom");
    }
}
