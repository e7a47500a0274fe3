//! Heuristic review of Java sources.
//!
//! Every check is a line or regex match; nothing is parsed. The report's
//! score starts at 100 and loses 10 per critical, 5 per major and 2 per
//! minor issue, clamped to `0..=100`.

mod rules;

pub use rules::{MAX_FILE_LINES, MAX_METHOD_LINES, MAX_PARAMETERS, TRY_WINDOW};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::issues::{IssueRecord, Severity};
use crate::language::Language;
use crate::source::SourceFile;

/// Issues listed per severity in rendered reports.
pub const REPORT_ISSUE_LIMIT: usize = 10;

/// Rule family of a review issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewCategory {
    Naming,
    CodeSmell,
    Security,
    Performance,
    Concurrency,
}

impl ReviewCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewCategory::Naming => "naming",
            ReviewCategory::CodeSmell => "code-smell",
            ReviewCategory::Security => "security",
            ReviewCategory::Performance => "performance",
            ReviewCategory::Concurrency => "concurrency",
        }
    }
}

/// Which rule families run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSet {
    #[default]
    All,
    Security,
    Performance,
    Naming,
}

impl CheckSet {
    pub fn includes(self, category: ReviewCategory) -> bool {
        match self {
            CheckSet::All => true,
            CheckSet::Security => category == ReviewCategory::Security,
            CheckSet::Performance => category == ReviewCategory::Performance,
            CheckSet::Naming => category == ReviewCategory::Naming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckSet::All => "all",
            CheckSet::Security => "security",
            CheckSet::Performance => "performance",
            CheckSet::Naming => "naming",
        }
    }
}

impl fmt::Display for CheckSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CheckSet::All),
            "security" => Ok(CheckSet::Security),
            "performance" => Ok(CheckSet::Performance),
            "naming" => Ok(CheckSet::Naming),
            other => Err(format!(
                "unknown check '{other}', expected all, security, performance or naming"
            )),
        }
    }
}

/// `100 - 10c - 5M - 2m`, clamped to `0..=100`.
pub fn score(critical: usize, major: usize, minor: usize) -> u8 {
    let penalty = critical
        .saturating_mul(10)
        .saturating_add(major.saturating_mul(5))
        .saturating_add(minor.saturating_mul(2));
    100usize.saturating_sub(penalty) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub root: PathBuf,
    pub checks: CheckSet,
    pub files: usize,
    pub lines: usize,
    /// Grouped by severity, in file order within a group.
    pub issues: Vec<IssueRecord>,
    pub score: u8,
    pub warnings: Vec<String>,
}

impl ReviewReport {
    /// Assemble a report, ordering issues by severity and scoring them.
    pub fn new(
        root: PathBuf,
        checks: CheckSet,
        files: usize,
        lines: usize,
        mut issues: Vec<IssueRecord>,
    ) -> Self {
        issues.sort_by_key(|issue| issue.priority);
        let score = score(
            count(&issues, Severity::Critical),
            count(&issues, Severity::Major),
            count(&issues, Severity::Minor),
        );
        Self {
            root,
            checks,
            files,
            lines,
            issues,
            score,
            warnings: Vec::new(),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        count(&self.issues, severity)
    }

    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &IssueRecord> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Percentage of all issues with this severity, rounded down.
    pub fn share(&self, severity: Severity) -> usize {
        self.count(severity) * 100 / self.issues.len().max(1)
    }
}

fn count(issues: &[IssueRecord], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

/// Run the selected checks over one Java file.
pub fn review_file(source: &SourceFile, checks: CheckSet) -> Vec<IssueRecord> {
    let stem = source
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let file = rules::JavaFile::new(&source.relative_path, stem, source.text());
    let mut issues = Vec::new();

    if checks.includes(ReviewCategory::Naming) {
        rules::check_naming(&file, &mut issues);
    }
    if checks.includes(ReviewCategory::CodeSmell) {
        rules::check_code_smell(&file, &mut issues);
    }
    if checks.includes(ReviewCategory::Security) {
        rules::check_security(&file, &mut issues);
    }
    if checks.includes(ReviewCategory::Performance) {
        rules::check_performance(&file, &mut issues);
    }
    if checks.includes(ReviewCategory::Concurrency) {
        rules::check_concurrency(&file, &mut issues);
    }

    issues
}

/// Review already-read sources. Non-Java files are ignored.
pub fn review_sources(root: PathBuf, sources: &[SourceFile], checks: CheckSet) -> ReviewReport {
    let java: Vec<&SourceFile> = sources
        .iter()
        .filter(|s| s.language == Language::Java)
        .collect();

    let issues: Vec<IssueRecord> = java
        .par_iter()
        .flat_map_iter(|source| review_file(source, checks))
        .collect();
    let lines = java.iter().map(|s| s.lines).sum();

    ReviewReport::new(root, checks, java.len(), lines, issues)
}
