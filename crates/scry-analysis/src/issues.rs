//! Findings reported to the user.

use std::fmt;

use scry_graph::Cycle;
use serde::{Deserialize, Serialize};

use crate::complexity::MAX_COMPLEXITY;
use crate::record::ModuleRecord;

pub const CATEGORY_CIRCULAR: &str = "circular-dependency";
pub const CATEGORY_COMPLEXITY: &str = "complexity";
pub const CATEGORY_IO: &str = "io";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    /// Sort key: critical=1, major=2, minor=3.
    pub fn priority(self) -> u8 {
        match self {
            Severity::Critical => 1,
            Severity::Major => 2,
            Severity::Minor => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }

    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Major, Severity::Minor];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub severity: Severity,
    /// Free-form tag such as `security` or `circular-dependency`.
    pub category: String,
    pub description: String,
    /// `path` or `path:line`.
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub suggestion: String,
    pub priority: u8,
}

impl IssueRecord {
    pub fn new(
        severity: Severity,
        category: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            description: description.into(),
            location: location.into(),
            code: None,
            suggestion: String::new(),
            priority: severity.priority(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }
}

/// Order by (priority, location, description).
pub fn sort_issues(issues: &mut [IssueRecord]) {
    issues.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.location.cmp(&b.location))
            .then_with(|| a.description.cmp(&b.description))
    });
}

/// Derive issues from cycles, complexity scores and read failures.
///
/// Complexity is only checked when a threshold is given.
pub fn generate_issues(
    records: &[ModuleRecord],
    cycles: &[Cycle],
    complexity_threshold: Option<u32>,
) -> Vec<IssueRecord> {
    let mut issues = Vec::new();

    for cycle in cycles {
        let location = cycle
            .modules
            .first()
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        issues.push(
            IssueRecord::new(
                Severity::Major,
                CATEGORY_CIRCULAR,
                format!("Circular import: {}", cycle.format_chain()),
                location,
            )
            .with_suggestion("Break the cycle by extracting shared code or inverting a dependency"),
        );
    }

    for record in records {
        if let Some(error) = &record.error {
            issues.push(
                IssueRecord::new(
                    Severity::Minor,
                    CATEGORY_IO,
                    format!("File could not be analyzed: {error}"),
                    record.path.clone(),
                )
                .with_suggestion("Check file permissions and size limits"),
            );
            continue;
        }

        let Some(threshold) = complexity_threshold else {
            continue;
        };

        if record.complexity >= MAX_COMPLEXITY {
            issues.push(
                IssueRecord::new(
                    Severity::Major,
                    CATEGORY_COMPLEXITY,
                    format!("Complexity at the cap of {MAX_COMPLEXITY}"),
                    record.path.clone(),
                )
                .with_suggestion("Split the file into smaller modules"),
            );
        } else if record.complexity >= threshold {
            issues.push(
                IssueRecord::new(
                    Severity::Minor,
                    CATEGORY_COMPLEXITY,
                    format!(
                        "Complexity {} exceeds threshold {}",
                        record.complexity, threshold
                    ),
                    record.path.clone(),
                )
                .with_suggestion("Extract helper functions to reduce branching"),
            );
        }
    }

    sort_issues(&mut issues);
    issues
}
