//! Analysis entry point.
//!
//! The [`Analyzer`] discovers files under a root, extracts facts from each of
//! them in parallel and assembles the summaries the selected
//! [`AnalysisMode`] asks for. It is useful for:
//! - quick codebase overviews
//! - CI checks for circular imports or complexity creep
//! - DDD naming audits and Java reviews

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use scry_graph::detect_cycles;
use tracing::{debug, info, warn};

use crate::config::{AnalysisMode, AnalyzerConfig};
use crate::ddd::{self, Declaration};
use crate::dependencies::{DependencyIndex, build_graph};
use crate::discovery::{FileFilter, discover_files, relative_path};
use crate::error::{AnalysisError, Result};
use crate::issues::generate_issues;
use crate::language::Language;
use crate::record::ModuleRecord;
use crate::result::AnalysisResult;
use crate::review::{CheckSet, ReviewReport, review_sources};
use crate::source::SourceFile;
use crate::structure::StructureSummary;

/// Typestate marker for an analyzer without a root.
#[derive(Debug, Clone, Copy)]
pub struct Unconfigured;

/// Typestate marker for an analyzer with a root.
#[derive(Debug, Clone, Copy)]
pub struct Configured;

/// Builder and runner for an analysis.
///
/// Uses the typestate pattern so that `analyze()` is only available once a
/// root path was given.
///
/// # Example
///
/// ```rust,no_run
/// use scry_analysis::{AnalysisMode, Analyzer};
///
/// # fn example() -> scry_analysis::Result<()> {
/// let result = Analyzer::new()
///     .root("src")               // Transitions to Configured
///     .exclude(["generated"])
///     .mode(AnalysisMode::Dependencies)
///     .analyze()?;
///
/// for cycle in &result.cycles {
///     println!("{}", cycle.format_chain());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer<State = Unconfigured> {
    config: AnalyzerConfig,
    _state: PhantomData<State>,
}

impl Default for Analyzer<Unconfigured> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<Unconfigured> {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            _state: PhantomData,
        }
    }

    /// Set the file or directory to analyze.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Analyzer<Configured> {
        self.config.root = path.into();
        Analyzer {
            config: self.config,
            _state: PhantomData,
        }
    }
}

impl Analyzer<Configured> {
    /// Start from a complete configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            _state: PhantomData,
        }
    }
}

impl<State> Analyzer<State> {
    /// Replace the exclusion list. The defaults are dropped.
    pub fn excludes(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.excludes = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Add to the exclusion list.
    pub fn exclude(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config
            .excludes
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add inclusion patterns (substrings or globs).
    pub fn include(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config
            .includes
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn mode(mut self, mode: AnalysisMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set maximum number of files to analyze (DoS protection).
    ///
    /// Default: 100,000
    pub fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Set maximum size of a single file in bytes.
    ///
    /// Default: 10 MB
    pub fn max_file_size(mut self, max: u64) -> Self {
        self.config.max_file_size = max;
        self
    }

    pub fn cycle_limit(mut self, limit: usize) -> Self {
        self.config.cycle_limit = limit;
        self
    }

    pub fn complexity_threshold(mut self, threshold: u32) -> Self {
        self.config.complexity_threshold = threshold;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

/// Per-file output of the parallel stage.
struct FileOutcome {
    record: ModuleRecord,
    declarations: Vec<Declaration>,
}

impl Analyzer<Configured> {
    /// Run the analysis.
    ///
    /// Fails only for configuration problems or a missing root. Unreadable
    /// files are logged and recorded with an error.
    pub fn analyze(self) -> Result<AnalysisResult> {
        let start = Instant::now();
        let config = self.config;
        config.validate()?;

        let root = resolve_root(&config.root)?;
        info!("Analyzing {} ({} mode)", root.display(), config.mode.as_str());

        let filter = FileFilter::new(&config.excludes, &config.includes)?;
        let discovery = discover_files(&root, &filter, config.max_files);
        let mut warnings = discovery.warnings;
        if discovery.truncated {
            warnings.push(format!(
                "File limit of {} reached; remaining files were not analyzed",
                config.max_files
            ));
        }
        info!("Found {} files to analyze", discovery.files.len());

        let want_patterns = config.mode.includes_patterns();
        let mut outcomes: Vec<FileOutcome> = discovery
            .files
            .par_iter()
            .filter_map(|path| {
                let language = Language::from_path(path)?;
                Some(analyze_file(
                    &root,
                    path,
                    language,
                    config.max_file_size,
                    want_patterns,
                ))
            })
            .collect();
        outcomes.sort_by(|a, b| a.record.path.cmp(&b.record.path));

        let mut modules = Vec::with_capacity(outcomes.len());
        let mut declarations = Vec::new();
        for outcome in outcomes {
            modules.push(outcome.record);
            declarations.extend(outcome.declarations);
        }

        let structure = config.mode.includes_structure().then(|| {
            let summary = StructureSummary::from_records(&modules);
            info!("Structure analysis complete");
            summary
        });

        let (dependencies, graph, cycles) = if config.mode.includes_dependencies() {
            let index = DependencyIndex::from_records(&modules);
            let graph = build_graph(&modules);
            let cycles = detect_cycles(&graph, config.cycle_limit);
            info!(
                "Dependency analysis complete: {} tokens, {} cycles",
                index.len(),
                cycles.len()
            );
            (Some(index), Some(graph), cycles)
        } else {
            (None, None, Vec::new())
        };

        let threshold = config
            .mode
            .includes_complexity()
            .then_some(config.complexity_threshold);
        let issues = generate_issues(&modules, &cycles, threshold);

        let ddd = want_patterns.then(|| {
            let report = ddd::build_report(&declarations);
            info!("Pattern analysis complete: {} building blocks", report.total());
            report
        });

        debug!("Analysis finished in {:?}", start.elapsed());

        Ok(AnalysisResult {
            root,
            mode: config.mode,
            modules,
            structure,
            dependencies,
            graph,
            cycles,
            issues,
            ddd,
            warnings,
        })
    }

    /// Review the Java files under the root.
    pub fn review(self, checks: CheckSet) -> Result<ReviewReport> {
        let config = self.config;
        config.validate()?;

        let root = resolve_root(&config.root)?;
        info!("Reviewing Java sources in {} ({} checks)", root.display(), checks);

        let filter = FileFilter::new(&config.excludes, &config.includes)?;
        let discovery = discover_files(&root, &filter, config.max_files);
        let mut warnings = discovery.warnings;

        let java: Vec<&PathBuf> = discovery
            .files
            .iter()
            .filter(|p| Language::from_path(p) == Some(Language::Java))
            .collect();
        info!("Found {} Java files", java.len());

        let results: Vec<std::result::Result<SourceFile, String>> = java
            .par_iter()
            .map(|path| {
                SourceFile::read(
                    path,
                    relative_path(&root, path),
                    Language::Java,
                    config.max_file_size,
                )
                .map_err(|e| e.to_string())
            })
            .collect();

        let mut sources = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(source) => sources.push(source),
                Err(message) => {
                    warn!("Skipping file: {}", message);
                    warnings.push(message);
                }
            }
        }

        let mut report = review_sources(root, &sources, checks);
        report.warnings = warnings;
        info!("Review complete: score {}/100", report.score);
        Ok(report)
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(AnalysisError::RootNotFound(root.to_path_buf()));
    }
    root.canonicalize()
        .map_err(|error| AnalysisError::RootUnreadable {
            path: root.to_path_buf(),
            error,
        })
}

fn analyze_file(
    root: &Path,
    path: &Path,
    language: Language,
    max_file_size: u64,
    want_declarations: bool,
) -> FileOutcome {
    let rel = relative_path(root, path);

    match SourceFile::read(path, rel.clone(), language, max_file_size) {
        Ok(source) => {
            debug!("Analyzed {} ({} lines)", rel, source.lines);
            let declarations = if want_declarations {
                ddd::scan(&source)
            } else {
                Vec::new()
            };
            FileOutcome {
                record: ModuleRecord::from_source(&source),
                declarations,
            }
        }
        Err(err) => {
            warn!("Could not analyze {}: {}", rel, err);
            let size = path.metadata().map(|m| m.len()).unwrap_or(0);
            FileOutcome {
                record: ModuleRecord::failed(rel, language, size, err.to_string()),
                declarations: Vec::new(),
            }
        }
    }
}
