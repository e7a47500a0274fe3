//! Logging infrastructure for the scry CLI.
//!
//! Structured logging with the `tracing` ecosystem. The analysis crates log
//! per-file debug events, skipped files as warnings and phase completion as
//! info.
//!
//! # Example
//!
//! ```rust,no_run
//! use scry_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting analysis");
//! debug!("Reading file: {}", "main.py");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "scry=debug,scry_analysis=debug,scry_graph=debug,scry_cli=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "scry=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "scry=info,scry_analysis=info";

/// Pick the filter directives for the given flags.
///
/// `--verbose` wins over `--quiet`, and both win over `RUST_LOG`.
pub fn filter_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program. Logs go to stderr so reports on
/// stdout stay clean.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match filter_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed, e.g. in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(true, false), Some(VERBOSE_FILTER));
        assert_eq!(filter_directives(true, true), Some(VERBOSE_FILTER));
        assert_eq!(filter_directives(false, true), Some(QUIET_FILTER));
        assert_eq!(filter_directives(false, false), None);
    }

    #[test]
    fn test_filters_parse() {
        let _ = EnvFilter::new(VERBOSE_FILTER);
        let _ = EnvFilter::new(QUIET_FILTER);
        let _ = EnvFilter::new(DEFAULT_FILTER);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
