use crate::cli::{Check, Mode};
use crate::config::ScryConfig;
use scry_analysis::{AnalysisMode, AnalyzerConfig, CheckSet, default_excludes};

// Conversion implementations: CLI enums -> analysis enums

impl From<Mode> for AnalysisMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Full => AnalysisMode::Full,
            Mode::Structure => AnalysisMode::Structure,
            Mode::Dependencies => AnalysisMode::Dependencies,
            Mode::Complexity => AnalysisMode::Complexity,
            Mode::Patterns => AnalysisMode::Patterns,
        }
    }
}

impl From<Check> for CheckSet {
    fn from(check: Check) -> Self {
        match check {
            Check::All => CheckSet::All,
            Check::Security => CheckSet::Security,
            Check::Performance => CheckSet::Performance,
            Check::Naming => CheckSet::Naming,
        }
    }
}

impl From<&ScryConfig> for AnalyzerConfig {
    fn from(config: &ScryConfig) -> Self {
        AnalyzerConfig {
            root: config.path.clone(),
            excludes: config.exclude.clone().unwrap_or_else(default_excludes),
            includes: config.include.clone(),
            mode: config.mode.into(),
            max_files: config.max_files,
            max_file_size: config.max_file_size,
            cycle_limit: config.cycle_limit,
            complexity_threshold: config.complexity_threshold,
        }
    }
}
