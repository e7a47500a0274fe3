//! Markdown report for the Java review.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use scry_analysis::review::REPORT_ISSUE_LIMIT;
use scry_analysis::{IssueRecord, ReviewReport, Severity};

/// Render the review report, stamped with `generated_at`.
pub fn render_review(report: &ReviewReport, generated_at: DateTime<Local>) -> String {
    let mut md = String::new();
    md.push_str("# Code Review Report\n\n");
    let _ = writeln!(
        md,
        "**Reviewed:** {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(md, "**Path:** `{}`", report.root.display());
    let _ = writeln!(md, "**Checks:** {}", report.checks);
    let _ = writeln!(md, "**Files:** {}", report.files);
    let _ = writeln!(md, "**Lines:** {}\n", thousands(report.lines));

    md.push_str("## Summary\n\n");
    let _ = writeln!(md, "**Score:** {}/100 {}\n", report.score, score_badge(report.score));
    md.push_str("| Type | Count | Share |\n");
    md.push_str("|------|-------|-------|\n");
    for severity in Severity::ALL {
        let _ = writeln!(
            md,
            "| {} | {} | {}% |",
            severity_title(severity),
            report.count(severity),
            report.share(severity)
        );
    }
    md.push('\n');

    if report.count(Severity::Critical) > 0 {
        md.push_str("## 🔴 Critical Issues\n\n");
        for (i, issue) in report
            .by_severity(Severity::Critical)
            .take(REPORT_ISSUE_LIMIT)
            .enumerate()
        {
            write_detailed(&mut md, i + 1, issue, true);
        }
    }

    if report.count(Severity::Major) > 0 {
        md.push_str("## 🟡 Major Issues\n\n");
        for (i, issue) in report
            .by_severity(Severity::Major)
            .take(REPORT_ISSUE_LIMIT)
            .enumerate()
        {
            write_detailed(&mut md, i + 1, issue, false);
        }
    }

    if report.count(Severity::Minor) > 0 {
        md.push_str("## 🟢 Minor Issues\n\n");
        for (i, issue) in report
            .by_severity(Severity::Minor)
            .take(REPORT_ISSUE_LIMIT)
            .enumerate()
        {
            let _ = writeln!(
                md,
                "{}. **[{}]** {} - `{}`",
                i + 1,
                issue.category,
                issue.description,
                issue.location
            );
        }
        md.push('\n');
    }

    if !report.warnings.is_empty() {
        md.push_str("## Warnings\n\n");
        for warning in &report.warnings {
            let _ = writeln!(md, "- {}", warning);
        }
        md.push('\n');
    }

    md.push_str("## Improvement Checklist\n\n");
    if report.count(Severity::Critical) > 0 {
        md.push_str("### Fix immediately\n");
        md.push_str("- [ ] Resolve every critical issue above\n");
        md.push_str("- [ ] Move secrets out of source code\n");
        md.push_str("- [ ] Replace string-built SQL with prepared statements\n\n");
    }
    md.push_str("### Short term\n");
    md.push_str("- [ ] Work through the major issues\n");
    md.push_str("- [ ] Add tests around the changed code\n");
    md.push_str("- [ ] Split long methods and oversized classes\n\n");
    md.push_str("### Long term\n");
    md.push_str("- [ ] Agree on naming and formatting conventions\n");
    md.push_str("- [ ] Run static analysis in CI\n");
    md.push_str("- [ ] Review code regularly\n");

    md
}

fn write_detailed(md: &mut String, index: usize, issue: &IssueRecord, with_code: bool) {
    let _ = writeln!(
        md,
        "### {}. [{}] {}\n",
        index, issue.category, issue.description
    );
    let _ = writeln!(md, "**Location:** `{}`\n", issue.location);
    if with_code {
        if let Some(code) = &issue.code {
            let _ = writeln!(md, "```java\n{}\n```\n", code);
        }
    }
    if !issue.suggestion.is_empty() {
        let _ = writeln!(md, "**Suggestion:** {}\n", issue.suggestion);
    }
}

fn severity_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴 Critical",
        Severity::Major => "🟡 Major",
        Severity::Minor => "🟢 Minor",
    }
}

pub fn score_badge(score: u8) -> &'static str {
    match score {
        80.. => "✅",
        60..=79 => "⚠️",
        _ => "❌",
    }
}

/// `1234567` as `1,234,567`.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
