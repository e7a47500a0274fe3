//! Analyze command implementation.

use std::time::Instant;

use scry_analysis::{Analyzer, AnalyzerConfig};

use crate::cli::AnalyzeArgs;
use crate::commands::utils;
use crate::config::ScryConfig;
use crate::error::Result;
use crate::report;
use crate::ui;

/// Execute the analyze command.
///
/// # Process
///
/// 1. Merge config file, environment and flags
/// 2. Run the analyzer for the selected mode
/// 3. Print a summary and any warnings to stderr
/// 4. Write the report to the output file, or stdout when none is set
///
/// # Errors
///
/// Returns errors for invalid configuration, a missing root and write
/// failures. Unreadable files only produce warnings.
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let config = ScryConfig::load(&args)?;
    utils::require_path(&config.path)?;

    let start = Instant::now();
    let spinner = ui::Spinner::new(&format!("Analyzing {}...", config.path.display()));
    let result = match Analyzer::with_config(AnalyzerConfig::from(&config)).analyze() {
        Ok(result) => {
            spinner.finish("Analysis complete");
            result
        }
        Err(e) => {
            spinner.fail("Analysis failed");
            return Err(e.into());
        }
    };

    ui::print_summary(&result, start.elapsed());
    for warning in &result.warnings {
        ui::warning(warning);
    }

    let rendered = report::render(&result, config.format)?;
    match &config.output {
        Some(output) => {
            utils::write_output(output, &rendered)?;
            ui::success(&format!("Report written to {}", output.display()));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
