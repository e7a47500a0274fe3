//! Formatting utilities for sizes, durations and run summaries.

use console::Term;
use owo_colors::OwoColorize;
use scry_analysis::AnalysisResult;
use std::time::Duration;

use super::{colors_enabled, is_quiet};

/// Format file size in human-readable format.
///
/// ```
/// use scry_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use scry_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Rows of the run summary table.
pub(crate) fn summary_rows(result: &AnalysisResult) -> Vec<(&'static str, String)> {
    let size: u64 = result.modules.iter().map(|m| m.size).sum();
    vec![
        ("Files", result.file_count().to_string()),
        ("Lines", result.total_lines().to_string()),
        ("Size", format_size(size)),
        ("Cycles", result.cycles.len().to_string()),
        ("Issues", result.issues.len().to_string()),
        ("Warnings", result.warnings.len().to_string()),
    ]
}

/// Print a summary table of an analysis run to stderr.
pub fn print_summary(result: &AnalysisResult, elapsed: Duration) {
    if is_quiet() {
        return;
    }

    let width = (Term::stderr().size().1 as usize).clamp(20, 60);
    let rule = "─".repeat(width);
    let color = colors_enabled();

    if color {
        eprintln!("\n{}", "Analysis Summary".bold().underline());
    } else {
        eprintln!("\nAnalysis Summary");
    }
    eprintln!("{}", rule);

    for (label, value) in summary_rows(result) {
        if color {
            eprintln!("  {} {:<10} {}", "▸".blue(), label, value.bright_white().bold());
        } else {
            eprintln!("  ▸ {:<10} {}", label, value);
        }
    }

    eprintln!("{}", rule);
    let took = format_duration(elapsed);
    if color {
        eprintln!("  {} {}", "Done in".bold(), took.green());
    } else {
        eprintln!("  Done in {}", took);
    }
}
