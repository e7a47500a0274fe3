//! Review command implementation.

use chrono::Local;
use scry_analysis::{Analyzer, Severity};

use crate::cli::ReviewArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::report;
use crate::ui;

/// Execute the review command.
///
/// Reviews the Java files under the path, writes the Markdown report and
/// prints the score with the issue counts.
pub fn execute(args: ReviewArgs) -> Result<()> {
    utils::require_path(&args.path)?;

    let spinner = ui::Spinner::new(&format!("Reviewing {}...", args.path.display()));
    let review = match Analyzer::new().root(&args.path).review(args.check.into()) {
        Ok(review) => {
            spinner.finish("Review complete");
            review
        }
        Err(e) => {
            spinner.fail("Review failed");
            return Err(e.into());
        }
    };

    for warning in &review.warnings {
        ui::warning(warning);
    }
    if review.files == 0 {
        ui::warning("No Java files found");
    }

    let rendered = report::render_review(&review, Local::now());
    utils::write_output(&args.output, &rendered)?;

    println!(
        "Score: {}/100 {}",
        review.score,
        report::score_badge(review.score)
    );
    println!(
        "Critical: {}  Major: {}  Minor: {}",
        review.count(Severity::Critical),
        review.count(Severity::Major),
        review.count(Severity::Minor)
    );
    ui::success(&format!("Report written to {}", args.output.display()));

    Ok(())
}
