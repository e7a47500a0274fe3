//! Report rendering.
//!
//! Renderers are pure functions from analysis values to strings; commands
//! decide where the text goes.

mod ddd;
mod review;
mod summary;

pub use ddd::render_ddd;
pub use review::{render_review, score_badge};
pub use summary::render_summary;

use crate::cli::ReportFormat;
use crate::error::Result;
use scry_analysis::AnalysisResult;

/// Entries listed per ranked section of the summary.
pub const TOP_N: usize = 10;

/// Render an analysis result in the requested format.
pub fn render(result: &AnalysisResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(render_summary(result)),
        ReportFormat::Json => to_json(result),
    }
}

/// The full result as pretty-printed JSON.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Join up to `limit` items with ", ", noting how many were left out.
pub(crate) fn join_limited(items: &[String], limit: usize) -> String {
    let shown = items[..items.len().min(limit)].join(", ");
    if items.len() > limit {
        format!("{} ... and {} more", shown, items.len() - limit)
    } else {
        shown
    }
}
