use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_positive;

/// Available scry subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a codebase
    ///
    /// Discovers source files, extracts imports, functions and classes,
    /// scores complexity and looks for circular imports.
    Analyze(AnalyzeArgs),

    /// Report DDD building blocks found by naming patterns
    Ddd(DddArgs),

    /// Review Java sources
    ///
    /// Runs naming, code smell, security, performance and concurrency
    /// checks and writes a scored Markdown report.
    Review(ReviewArgs),

    /// Write an example scry.config.json
    Init(InitArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Directory or file to analyze [default: .]
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Analyze a single file (takes precedence over --path)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exclude patterns, comma separated (replaces the defaults)
    ///
    /// A path containing any pattern as a substring is skipped.
    ///
    /// Example: --exclude node_modules,target,generated
    #[arg(short, long, value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Include patterns, comma separated
    ///
    /// Substrings or globs such as `*.py`. Excludes still win.
    #[arg(short, long, value_name = "PATTERNS")]
    pub include: Option<String>,

    /// Analysis mode [default: full]
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Report format [default: markdown]
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Path to scry.config.json
    ///
    /// Defaults to scry.config.json in the current directory, if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop after discovering this many files
    #[arg(long, value_parser = parse_positive, value_name = "N")]
    pub max_files: Option<usize>,

    /// Skip files larger than this many bytes
    #[arg(long, value_parser = parse_positive, value_name = "BYTES")]
    pub max_file_size: Option<usize>,

    /// Maximum number of reported cycles
    #[arg(long, value_parser = parse_positive, value_name = "N")]
    pub cycle_limit: Option<usize>,

    /// Complexity that raises an issue
    #[arg(long, value_parser = parse_positive, value_name = "N")]
    pub complexity_threshold: Option<usize>,
}

/// Arguments for the ddd command
#[derive(Args, Debug, Clone)]
pub struct DddArgs {
    /// Directory to analyze
    #[arg(short, long, default_value = ".", value_name = "PATH")]
    pub path: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exclude patterns, comma separated (replaces the defaults)
    #[arg(short, long, value_name = "PATTERNS")]
    pub exclude: Option<String>,
}

/// Arguments for the review command
#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    /// Directory containing Java sources
    #[arg(short, long, default_value = ".", value_name = "PATH")]
    pub path: PathBuf,

    /// Report file
    #[arg(short, long, default_value = "code-review-report.md", value_name = "FILE")]
    pub output: PathBuf,

    /// Which checks to run
    ///
    /// - all: every rule family, including code smell and concurrency
    /// - security: SQL concatenation, hard-coded secrets, unescaped input
    /// - performance: lookups in loops, unclosed streams, string concatenation
    /// - naming: class and method names
    #[arg(short, long, value_enum, default_value = "all")]
    pub check: Check,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing scry.config.json
    #[arg(long)]
    pub force: bool,

    /// Print the JSON schema of scry.config.json instead of writing a file
    #[arg(long)]
    pub schema: bool,
}
