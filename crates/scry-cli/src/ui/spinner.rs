//! Spinner for tasks without known duration.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

use super::{colors_enabled, is_ci, is_quiet};

/// Spinner shown on stderr while an analysis runs.
///
/// Hidden with `--quiet`, in CI and when stderr is not a terminal.
///
/// ```no_run
/// use scry_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Analyzing...");
/// // Do work...
/// spinner.finish("Analyzed 42 files");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let visible = !is_quiet() && !is_ci() && console::user_attended_stderr();
        let pb = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("spinner template should parse")
                .tick_strings(&["◐", "◓", "◑", "◒", "●"]),
        );
        pb.set_message(message.to_string());
        if visible {
            pb.enable_steady_tick(Duration::from_millis(100));
        }

        Self { pb }
    }

    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Finish with a green checkmark.
    pub fn finish(&self, message: &str) {
        let mark = if colors_enabled() {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        };
        self.pb.finish_with_message(format!("{} {}", mark, message));
    }

    /// Finish with a red cross.
    pub fn fail(&self, message: &str) {
        let mark = if colors_enabled() {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        self.pb.finish_with_message(format!("{} {}", mark, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = Spinner::new("Loading...");
        spinner.set_message("Updated");
        spinner.finish("Done");
    }

    #[test]
    fn test_spinner_fail() {
        let spinner = Spinner::new("Processing");
        spinner.fail("Failed");
    }
}
