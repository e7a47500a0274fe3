//! DDD command implementation.

use scry_analysis::{AnalysisMode, Analyzer};

use crate::cli::{DddArgs, split_list};
use crate::commands::utils;
use crate::error::Result;
use crate::report;
use crate::ui;

/// Execute the ddd command.
///
/// Runs a patterns-only analysis and renders the building blocks as
/// Markdown, to `--output` or stdout.
pub fn execute(args: DddArgs) -> Result<()> {
    utils::require_path(&args.path)?;

    let mut analyzer = Analyzer::new().root(&args.path).mode(AnalysisMode::Patterns);
    if let Some(exclude) = &args.exclude {
        analyzer = analyzer.excludes(split_list(exclude));
    }

    let spinner = ui::Spinner::new("Classifying domain building blocks...");
    let result = match analyzer.analyze() {
        Ok(result) => {
            spinner.finish("Pattern analysis complete");
            result
        }
        Err(e) => {
            spinner.fail("Pattern analysis failed");
            return Err(e.into());
        }
    };

    let ddd = result.ddd.unwrap_or_default();
    ui::info(&format!(
        "Found {} aggregates, {} entities, {} value objects",
        ddd.aggregates.len(),
        ddd.entities.len(),
        ddd.value_objects.len()
    ));
    for warning in ddd.metrics.god_aggregate_warnings.iter().chain(&result.warnings) {
        ui::warning(warning);
    }

    let rendered = report::render_ddd(&ddd, &result.root);
    match &args.output {
        Some(output) => {
            utils::write_output(output, &rendered)?;
            ui::success(&format!("DDD report written to {}", output.display()));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
