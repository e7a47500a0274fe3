use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which parts of the analysis to run
#[derive(
    Copy, Clone, Default, PartialEq, Eq, Debug, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Everything below
    #[default]
    #[value(name = "full")]
    Full,

    /// Languages, directories and entry points
    #[value(name = "structure")]
    Structure,

    /// Import index and circular imports
    #[value(name = "dependencies")]
    Dependencies,

    /// Complexity ranking and threshold issues
    #[value(name = "complexity")]
    Complexity,

    /// DDD naming patterns
    #[value(name = "patterns")]
    Patterns,
}

/// Output format of the analyze report
#[derive(
    Copy, Clone, Default, PartialEq, Eq, Debug, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    #[value(name = "markdown")]
    Markdown,

    /// The full analysis result as JSON
    #[value(name = "json")]
    Json,
}

/// Rule families for the review command
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, ValueEnum)]
pub enum Check {
    #[default]
    #[value(name = "all")]
    All,
    #[value(name = "security")]
    Security,
    #[value(name = "performance")]
    Performance,
    #[value(name = "naming")]
    Naming,
}
