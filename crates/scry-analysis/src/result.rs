use std::fmt;
use std::path::PathBuf;

use scry_graph::{Cycle, DependencyGraph};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisMode;
use crate::ddd::DddReport;
use crate::dependencies::DependencyIndex;
use crate::issues::{IssueRecord, Severity};
use crate::record::ModuleRecord;
use crate::structure::StructureSummary;

/// Everything one analysis run produced.
///
/// Sections the mode did not ask for are `None`. The value is immutable once
/// returned; renderers only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Canonical root path.
    pub root: PathBuf,
    pub mode: AnalysisMode,
    /// Per-file records sorted by relative path.
    pub modules: Vec<ModuleRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<StructureSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<DependencyGraph>,
    pub cycles: Vec<Cycle>,
    pub issues: Vec<IssueRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddd: Option<DddReport>,
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    pub fn file_count(&self) -> usize {
        self.modules.len()
    }

    pub fn total_lines(&self) -> usize {
        self.modules.iter().map(|m| m.lines).sum()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// True when no critical or major issue was found.
    pub fn is_ok(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Critical | Severity::Major))
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Mean complexity over readable files; 0 when there are none.
    pub fn average_complexity(&self) -> f64 {
        let scored: Vec<u32> = self
            .modules
            .iter()
            .filter(|m| m.error.is_none())
            .map(|m| m.complexity)
            .collect();
        if scored.is_empty() {
            return 0.0;
        }
        scored.iter().map(|c| f64::from(*c)).sum::<f64>() / scored.len() as f64
    }

    /// Files by complexity, highest first; ties by path.
    pub fn most_complex(&self, limit: usize) -> Vec<&ModuleRecord> {
        let mut ranked: Vec<&ModuleRecord> =
            self.modules.iter().filter(|m| m.error.is_none()).collect();
        ranked.sort_by(|a, b| b.complexity.cmp(&a.complexity).then_with(|| a.path.cmp(&b.path)));
        ranked.truncate(limit);
        ranked
    }

    pub fn module(&self, path: &str) -> Option<&ModuleRecord> {
        self.modules
            .binary_search_by(|m| m.path.as_str().cmp(path))
            .ok()
            .map(|idx| &self.modules[idx])
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} lines, {} cycles, {} issues",
            self.file_count(),
            self.total_lines(),
            self.cycles.len(),
            self.issues.len()
        )
    }
}
