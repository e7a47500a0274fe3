//! Analyzer configuration and defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Default maximum number of files to analyze (DoS protection).
///
/// Discovery stops once this many files were collected and a warning is
/// attached to the result.
pub const DEFAULT_MAX_FILES: usize = 100_000;

/// Maximum file size in bytes (10 MB).
///
/// Larger files are not read; their record carries an error instead.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Complexity at or above which a file is reported as an issue.
pub const DEFAULT_COMPLEXITY_THRESHOLD: u32 = 20;

/// Path fragments excluded when the caller gives no exclusion list.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    "vendor",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "dist",
    "build",
    ".idea",
    ".vscode",
];

pub fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

/// Which parts of the analysis to compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Full,
    Structure,
    Dependencies,
    Complexity,
    Patterns,
}

impl AnalysisMode {
    pub fn includes_structure(self) -> bool {
        matches!(self, Self::Full | Self::Structure)
    }

    pub fn includes_dependencies(self) -> bool {
        matches!(self, Self::Full | Self::Dependencies)
    }

    pub fn includes_complexity(self) -> bool {
        matches!(self, Self::Full | Self::Complexity)
    }

    pub fn includes_patterns(self) -> bool {
        matches!(self, Self::Full | Self::Patterns)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Structure => "structure",
            Self::Dependencies => "dependencies",
            Self::Complexity => "complexity",
            Self::Patterns => "patterns",
        }
    }
}

/// Options for an analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// File or directory to analyze.
    pub root: PathBuf,

    /// Substrings that exclude a path. Always wins over `includes`.
    pub excludes: Vec<String>,

    /// Substrings or globs a path must match, when non-empty.
    pub includes: Vec<String>,

    pub mode: AnalysisMode,

    /// Stop discovery after this many files.
    pub max_files: usize,

    /// Skip reading files larger than this.
    pub max_file_size: u64,

    /// Maximum number of reported cycles.
    pub cycle_limit: usize,

    /// Complexity that triggers an issue.
    pub complexity_threshold: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            excludes: default_excludes(),
            includes: Vec::new(),
            mode: AnalysisMode::Full,
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            cycle_limit: scry_graph::DEFAULT_CYCLE_LIMIT,
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    /// Reject budgets that would make the run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_files == 0 {
            return Err(AnalysisError::InvalidOption {
                field: "maxFiles",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.max_file_size == 0 {
            return Err(AnalysisError::InvalidOption {
                field: "maxFileSize",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.complexity_threshold == 0 {
            return Err(AnalysisError::InvalidOption {
                field: "complexityThreshold",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_coverage() {
        assert!(AnalysisMode::Full.includes_structure());
        assert!(AnalysisMode::Full.includes_patterns());
        assert!(AnalysisMode::Dependencies.includes_dependencies());
        assert!(!AnalysisMode::Dependencies.includes_structure());
        assert!(!AnalysisMode::Structure.includes_complexity());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
        assert_eq!(AnalyzerConfig::default().excludes.len(), DEFAULT_EXCLUDES.len());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = AnalyzerConfig {
            max_files: 0,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidOption { field: "maxFiles", .. })
        ));
    }
}
