//! scry CLI - heuristic codebase analysis.
//!
//! This is the main entry point for the scry CLI. It handles command-line argument
//! parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use scry_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color, args.quiet);

    let result = match args.command {
        cli::Command::Analyze(analyze_args) => commands::analyze_execute(analyze_args),
        cli::Command::Ddd(ddd_args) => commands::ddd_execute(ddd_args),
        cli::Command::Review(review_args) => commands::review_execute(review_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
