//! scry CLI - heuristic codebase analysis from the command line.
//!
//! This crate exposes the analysis engine of `scry-analysis` through a small
//! CLI: a codebase summary, a DDD naming report and a Java review report.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand
//! - [`config`] - `scry.config.json` loading and validation
//! - [`error`] - error types with actionable messages
//! - [`logger`] - tracing subscriber setup
//! - [`report`] - Markdown and JSON rendering
//! - [`ui`] - status messages, spinner and formatting helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use scry_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod report;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
