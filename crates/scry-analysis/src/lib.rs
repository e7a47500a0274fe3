//! # scry-analysis
//!
//! Lightweight, regex-driven source analysis.
//!
//! This crate discovers source files under a root, pulls imports, functions
//! and classes out of them with per-language regular expressions, scores a
//! naive cyclomatic complexity, and finds circular imports over the raw
//! import tokens. On top of that it offers DDD naming heuristics and a set of
//! Java review rules.
//!
//! It is a pattern matcher, not a parser: there is no AST, no scoping and no
//! import resolution. Results are heuristics meant for overviews and CI
//! warnings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn example() -> scry_analysis::Result<()> {
//! let result = scry_analysis::analyze("src", None, None)?;
//!
//! println!("{result}");
//! for cycle in &result.cycles {
//!     println!("cycle: {}", cycle.format_chain());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Use [`Analyzer`] for the remaining options (mode, budgets, thresholds).

pub mod analyzer;
pub mod complexity;
pub mod config;
pub mod ddd;
pub mod dependencies;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod issues;
pub mod language;
pub mod record;
pub mod result;
pub mod review;
pub mod source;
pub mod structure;

pub use analyzer::{Analyzer, Configured, Unconfigured};
pub use complexity::{MAX_COMPLEXITY, complexity};
pub use config::{
    AnalysisMode, AnalyzerConfig, DEFAULT_COMPLEXITY_THRESHOLD, DEFAULT_EXCLUDES,
    DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES, default_excludes,
};
pub use ddd::DddReport;
pub use dependencies::{DependencyIndex, build_graph};
pub use discovery::{Discovery, FileFilter, discover_files};
pub use error::{AnalysisError, ReadError, Result};
pub use extract::{Extraction, extract};
pub use issues::{IssueRecord, Severity};
pub use language::Language;
pub use record::ModuleRecord;
pub use result::AnalysisResult;
pub use review::{CheckSet, ReviewReport};
pub use source::SourceFile;
pub use structure::{FileEntry, StructureSummary};

pub use scry_graph::{Cycle, DEFAULT_CYCLE_LIMIT, DependencyGraph, ModuleId, detect_cycles};

use std::path::PathBuf;

/// Analyze `root` in full mode.
///
/// `excludes` replaces the default exclusion list when given; `includes`
/// restricts discovery to matching paths.
pub fn analyze(
    root: impl Into<PathBuf>,
    excludes: Option<Vec<String>>,
    includes: Option<Vec<String>>,
) -> Result<AnalysisResult> {
    let mut analyzer = Analyzer::new().root(root);
    if let Some(excludes) = excludes {
        analyzer = analyzer.excludes(excludes);
    }
    if let Some(includes) = includes {
        analyzer = analyzer.include(includes);
    }
    analyzer.analyze()
}

#[cfg(test)]
mod tests;
