//! Markdown summary of an analysis run.

use std::fmt::Write as _;

use scry_analysis::AnalysisResult;

use super::TOP_N;

/// Render the codebase summary.
///
/// Sections appear only when the run's mode produced them.
pub fn render_summary(result: &AnalysisResult) -> String {
    let mut md = String::new();
    md.push_str("# Codebase Analysis Summary\n\n");

    md.push_str("## Overview\n");
    let _ = writeln!(md, "- Root: `{}`", result.root.display());
    let _ = writeln!(md, "- Mode: {}", result.mode.as_str());
    let _ = writeln!(md, "- Total Files: {}", result.file_count());
    if let Some(structure) = &result.structure {
        let _ = writeln!(md, "- Total Directories: {}", structure.total_dirs);
    }
    let _ = writeln!(md, "- Total Lines: {}", result.total_lines());
    md.push('\n');

    if let Some(structure) = &result.structure {
        md.push_str("## Languages\n");
        for (language, count) in structure.languages_by_count() {
            let _ = writeln!(md, "- {}: {} files", language.name(), count);
        }
        md.push('\n');

        if !structure.entry_points.is_empty() {
            md.push_str("## Entry Points\n");
            for entry in structure.entry_points.iter().take(TOP_N) {
                let _ = writeln!(md, "- `{}`", entry);
            }
            md.push('\n');
        }

        md.push_str("## Directory Structure\n");
        for (dir, files) in &structure.directories {
            if dir != "." {
                let _ = writeln!(md, "- `{}/` ({} files)", dir, files.len());
            }
        }
        md.push('\n');
    }

    if let Some(dependencies) = &result.dependencies {
        md.push_str("## Dependencies\n");
        let _ = writeln!(md, "- Distinct imports: {}", dependencies.len());
        if let Some(graph) = &result.graph {
            let stats = graph.statistics();
            let _ = writeln!(md, "- Graph modules: {}", stats.module_count);
            let _ = writeln!(md, "- Internal edges: {}", stats.internal_edge_count);
            let _ = writeln!(md, "- External imports: {}", stats.external_token_count);
        }
        for (token, count) in dependencies.most_imported(TOP_N) {
            let _ = writeln!(md, "- `{}` imported by {} files", token, count);
        }
        md.push('\n');

        md.push_str("## Circular Dependencies\n");
        if result.cycles.is_empty() {
            md.push_str("No circular imports found.\n");
        } else {
            for cycle in &result.cycles {
                let _ = writeln!(md, "- {}", cycle.format_chain());
            }
        }
        md.push('\n');
    }

    if result.mode.includes_complexity() {
        md.push_str("## Complexity\n");
        let _ = writeln!(md, "- Average: {:.1}", result.average_complexity());
        for module in result.most_complex(TOP_N) {
            let _ = writeln!(md, "- `{}`: {}", module.path, module.complexity);
        }
        md.push('\n');
    }

    if let Some(ddd) = &result.ddd {
        md.push_str("## DDD Building Blocks\n");
        let _ = writeln!(md, "- Aggregates: {}", ddd.aggregates.len());
        let _ = writeln!(md, "- Entities: {}", ddd.entities.len());
        let _ = writeln!(md, "- Value Objects: {}", ddd.value_objects.len());
        let _ = writeln!(md, "- Domain Services: {}", ddd.domain_services.len());
        let _ = writeln!(md, "- Repositories: {}", ddd.repositories.len());
        let _ = writeln!(md, "- Domain Events: {}", ddd.domain_events.len());
        let _ = writeln!(md, "- Factories: {}", ddd.factories.len());
        md.push('\n');
    }

    if !result.issues.is_empty() {
        md.push_str("## Issues\n");
        for issue in &result.issues {
            let _ = writeln!(
                md,
                "- **{}** [{}] {} (`{}`)",
                issue.severity, issue.category, issue.description, issue.location
            );
        }
        md.push('\n');
    }

    if result.has_warnings() {
        md.push_str("## Warnings\n");
        for warning in &result.warnings {
            let _ = writeln!(md, "- {}", warning);
        }
        md.push('\n');
    }

    md.truncate(md.trim_end().len());
    md.push('\n');
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use scry_analysis::issues::generate_issues;
    use scry_analysis::{
        AnalysisMode, Cycle, DependencyIndex, Language, ModuleId, ModuleRecord, StructureSummary,
        build_graph,
    };
    use std::path::PathBuf;

    fn record(path: &str, imports: &[&str], complexity: u32) -> ModuleRecord {
        let mut record = ModuleRecord::failed(path.to_string(), Language::Python, 10, "");
        record.error = None;
        record.lines = 3;
        record.imports = imports.iter().map(|s| s.to_string()).collect();
        record.complexity = complexity;
        record
    }

    fn sample(mode: AnalysisMode) -> AnalysisResult {
        let modules = vec![
            record("a.py", &["b", "os"], 2),
            record("app/main.py", &["os"], 7),
            record("b.py", &["a"], 1),
        ];
        let cycles = vec![Cycle::new(vec![ModuleId::new("a"), ModuleId::new("b")])];
        AnalysisResult {
            root: PathBuf::from("/repo"),
            mode,
            structure: mode
                .includes_structure()
                .then(|| StructureSummary::from_records(&modules)),
            dependencies: mode
                .includes_dependencies()
                .then(|| DependencyIndex::from_records(&modules)),
            graph: mode
                .includes_dependencies()
                .then(|| build_graph(&modules)),
            issues: generate_issues(&modules, &cycles, None),
            cycles,
            modules,
            ddd: None,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_full_summary_sections() {
        let md = render_summary(&sample(AnalysisMode::Full));

        assert!(md.starts_with("# Codebase Analysis Summary\n"));
        assert!(md.contains("- Total Files: 3"));
        assert!(md.contains("- Total Directories: 1"));
        assert!(md.contains("- python: 3 files"));
        assert!(md.contains("## Entry Points\n- `app/main.py`"));
        assert!(md.contains("- `app/` (1 files)"));
        assert!(md.contains("- `os` imported by 2 files"));
        assert!(md.contains("- Graph modules: 3"));
        assert!(md.contains("- Internal edges: 2"));
        assert!(md.contains("- External imports: 1"));
        assert!(md.contains("- a -> b -> a"));
        assert!(md.contains("- `app/main.py`: 7"));
        assert!(md.contains("- Average: 3.3"));
        assert!(md.contains("- **major** [circular-dependency]"));
        assert!(!md.contains("## Warnings"));
        assert!(md.ends_with(")\n"));
    }

    #[test]
    fn test_structure_mode_omits_other_sections() {
        let mut result = sample(AnalysisMode::Structure);
        result.cycles.clear();
        result.issues.clear();
        let md = render_summary(&result);

        assert!(md.contains("## Languages"));
        assert!(!md.contains("## Dependencies"));
        assert!(!md.contains("## Complexity"));
        assert!(!md.contains("## Issues"));
    }

    #[test]
    fn test_no_cycles_message() {
        let mut result = sample(AnalysisMode::Dependencies);
        result.cycles.clear();
        result.issues.clear();
        result.warnings.push("File limit of 3 reached".to_string());
        let md = render_summary(&result);

        assert!(md.contains("No circular imports found."));
        assert!(!md.contains("## Languages"));
        assert!(md.contains("## Warnings\n- File limit of 3 reached"));
    }
}
