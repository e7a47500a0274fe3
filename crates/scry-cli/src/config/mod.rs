//! Configuration for the analyze command with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and a config file.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::cli::{Mode, ReportFormat};
pub use defaults::*;
pub use loading::{CliOverrides, ENV_PREFIX, camel_case};

/// scry configuration, loaded from scry.config.json, `SCRY_*` variables and
/// CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScryConfig {
    /// Directory or file to analyze
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Substring exclude patterns; replaces the built-in list when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Substring or glob include patterns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Analysis mode
    #[serde(default)]
    pub mode: Mode,

    /// Report format
    #[serde(default)]
    pub format: ReportFormat,

    /// Report file; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Stop discovery after this many files
    #[serde(default = "default_max_files")]
    #[schemars(range(min = 1))]
    pub max_files: usize,

    /// Skip files larger than this many bytes
    #[serde(default = "default_max_file_size")]
    #[schemars(range(min = 1))]
    pub max_file_size: u64,

    /// Maximum number of reported cycles
    #[serde(default = "default_cycle_limit")]
    #[schemars(range(min = 1, max = 1000))]
    pub cycle_limit: usize,

    /// Complexity that raises an issue
    #[serde(default = "default_complexity_threshold")]
    #[schemars(range(min = 1))]
    pub complexity_threshold: u32,
}

impl Default for ScryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            exclude: None,
            include: Vec::new(),
            mode: Mode::Full,
            format: ReportFormat::Markdown,
            output: None,
            max_files: default_max_files(),
            max_file_size: default_max_file_size(),
            cycle_limit: default_cycle_limit(),
            complexity_threshold: default_complexity_threshold(),
        }
    }
}

impl ScryConfig {
    /// Generate JSON Schema for scry.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(ScryConfig);
        serde_json::to_value(schema).expect("Schema serialization should never fail")
    }

    /// Generate example scry.config.json content.
    pub fn example_config() -> String {
        serde_json::to_string_pretty(&Self {
            path: PathBuf::from("src"),
            exclude: Some(
                ["node_modules", "target", "vendor", ".git", "dist", "build"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            include: Vec::new(),
            mode: Mode::Full,
            format: ReportFormat::Markdown,
            output: Some(PathBuf::from("codebase-analysis.md")),
            max_files: default_max_files(),
            max_file_size: default_max_file_size(),
            cycle_limit: default_cycle_limit(),
            complexity_threshold: default_complexity_threshold(),
        })
        .expect("Example config serialization should never fail")
    }
}
