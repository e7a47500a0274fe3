//! Command-line interface definition for scry.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `scry analyze` - Codebase summary: structure, dependencies, complexity, cycles
//! - `scry ddd` - DDD naming-pattern report
//! - `scry review` - Java review report with a quality score
//! - `scry init` - Write an example `scry.config.json`

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{AnalyzeArgs, Command, DddArgs, InitArgs, ReviewArgs};
pub use enums::*;
pub use validation::{parse_positive, split_list};

/// scry - heuristic codebase analysis
#[derive(Parser, Debug)]
#[command(
    name = "scry",
    version,
    about = "Heuristic codebase analysis with regular expressions",
    long_about = "scry scans source trees with per-language regular expressions.\n\
                  It summarizes structure, imports, complexity and circular imports,\n\
                  reports DDD naming patterns and reviews Java sources."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Progress and status messages are hidden. Reports are still written.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
