//! Terminal UI utilities for status messages, spinners and formatting.
//!
//! All output goes to stderr; stdout is reserved for reports. Colors are
//! disabled by `--no-color`, `NO_COLOR` or a non-terminal stderr, and
//! `--quiet` silences everything but errors.
//!
//! # Examples
//!
//! ```no_run
//! use scry_cli::ui;
//!
//! ui::init_colors(false, false);
//!
//! let spinner = ui::Spinner::new("Analyzing...");
//! spinner.finish("Analyzed 12 files");
//!
//! ui::success("Report written");
//! ui::error("Failed to read configuration file");
//! ```

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, print_summary};
pub use messages::{error, info, success, warning};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(true);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color and verbosity state from the global flags.
///
/// Should be called once, early in `main`.
pub fn init_colors(no_color: bool, quiet: bool) {
    let colors = !no_color && should_use_color();
    COLORS.store(colors, Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
    console::set_colors_enabled_stderr(colors);
}

pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
