//! End-to-end tests for [`Analyzer`] over temporary projects.

use super::test_helpers::*;
use crate::issues::{CATEGORY_CIRCULAR, CATEGORY_COMPLEXITY};
use crate::{AnalysisError, AnalysisMode, Analyzer, CheckSet, Language, Severity};
use tempfile::TempDir;

#[test]
fn test_two_module_cycle() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_python_cycle(&temp);

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.file_count(), 2);
    assert_eq!(result.cycles.len(), 1);
    let members: Vec<&str> = result.cycles[0]
        .modules
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert_eq!(members, vec!["a", "b"]);
    assert_eq!(result.cycles[0].format_chain(), "a -> b -> a");

    let circular: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.category == CATEGORY_CIRCULAR)
        .collect();
    assert_eq!(circular.len(), 1);
    assert_eq!(circular[0].severity, Severity::Major);
    assert!(!result.is_ok());
}

#[test]
fn test_no_imports_no_cycles() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(&temp, &[("a.py", "def main():\n    pass\n")]);

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    assert!(result.cycles.is_empty());
    assert!(!result.has_cycles());
    let module = result.module("a.py").expect("a.py should be analyzed");
    assert!(module.imports.is_empty());
    assert_eq!(module.functions, vec!["main"]);
}

#[test]
fn test_mixed_project_full_mode() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_mixed_project(&temp);

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    let paths: Vec<&str> = result.modules.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "README.md",
            "app/service.py",
            "main.py",
            "web/api.ts",
            "web/index.ts"
        ]
    );

    let structure = result.structure.as_ref().expect("full mode has structure");
    assert_eq!(structure.total_files, 5);
    assert_eq!(structure.languages.get(&Language::Python), Some(&2));
    assert_eq!(structure.languages.get(&Language::TypeScript), Some(&2));
    assert!(structure.entry_points.iter().any(|e| e == "main.py"));
    assert!(structure.entry_points.iter().any(|e| e == "web/index.ts"));

    let deps = result.dependencies.as_ref().expect("full mode has dependencies");
    assert_eq!(deps.importers("os"), vec!["main.py"]);
    assert!(result.graph.is_some());

    let ddd = result.ddd.as_ref().expect("full mode has ddd");
    assert!(ddd.domain_services.iter().any(|s| s.name == "PaymentService"));

    let service = result.module("app/service.py").expect("service analyzed");
    assert_eq!(service.classes, vec!["PaymentService"]);
    assert_eq!(service.complexity, 2);
}

#[test]
fn test_structure_mode_skips_other_sections() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_python_cycle(&temp);

    let result = Analyzer::new()
        .root(&root)
        .mode(AnalysisMode::Structure)
        .analyze()
        .expect("Analysis should succeed");

    assert!(result.structure.is_some());
    assert!(result.dependencies.is_none());
    assert!(result.graph.is_none());
    assert!(result.ddd.is_none());
    assert!(result.cycles.is_empty());
    assert!(result.issues.is_empty());
}

#[test]
fn test_patterns_mode_builds_ddd_report() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            (
                "orders/order.py",
                "class OrderAggregate:\n    def place(self):\n        pass\n",
            ),
            (
                "orders/repo.py",
                "class OrderRepository(ABC):\n    @abstractmethod\n    def save(self, order):\n        pass\n",
            ),
        ],
    );

    let result = Analyzer::new()
        .root(&root)
        .mode(AnalysisMode::Patterns)
        .analyze()
        .expect("Analysis should succeed");

    assert!(result.structure.is_none());
    let ddd = result.ddd.expect("patterns mode has ddd");
    assert_eq!(ddd.aggregates.len(), 1);
    assert_eq!(ddd.aggregates[0].name, "OrderAggregate");
    assert_eq!(ddd.repositories.len(), 1);
    assert_eq!(ddd.repositories[0].aggregate_type, "Order");
    assert_eq!(ddd.bounded_contexts.len(), 1);
    assert_eq!(ddd.bounded_contexts[0].name, "Orders");
}

#[test]
fn test_complexity_mode_reports_threshold() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("nested.py", "if x:\n    if y:\n        pass\n"),
            ("flat.py", "x = 1\n"),
        ],
    );

    let result = Analyzer::new()
        .root(&root)
        .mode(AnalysisMode::Complexity)
        .complexity_threshold(3)
        .analyze()
        .expect("Analysis should succeed");

    let complex: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.category == CATEGORY_COMPLEXITY)
        .collect();
    assert_eq!(complex.len(), 1);
    assert_eq!(complex[0].location, "nested.py");
    assert_eq!(complex[0].severity, Severity::Minor);
    assert_eq!(result.most_complex(1)[0].path, "nested.py");
}

#[test]
fn test_exclude_wins_over_include() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("vendor/y.py", "import z\n"),
            ("src/y.py", "import z\n"),
            ("src/other.py", "import z\n"),
        ],
    );

    let result = Analyzer::new()
        .root(&root)
        .include(["y.py"])
        .analyze()
        .expect("Analysis should succeed");

    let paths: Vec<&str> = result.modules.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(paths, vec!["src/y.py"]);
}

#[test]
fn test_include_glob() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_mixed_project(&temp);

    let result = Analyzer::new()
        .root(&root)
        .include(["*.ts"])
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.file_count(), 2);
    assert!(result.modules.iter().all(|m| m.language == Language::TypeScript));
}

#[test]
fn test_replacing_excludes_drops_defaults() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_mixed_project(&temp);

    let result = Analyzer::new()
        .root(&root)
        .excludes(["web"])
        .analyze()
        .expect("Analysis should succeed");

    assert!(result.module("node_modules/lib/index.js").is_some());
    assert!(result.module("web/api.ts").is_none());
}

#[test]
fn test_invalid_include_pattern() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_python_cycle(&temp);

    let err = Analyzer::new()
        .root(&root)
        .include(["src/[ab"])
        .analyze()
        .expect_err("Invalid glob should fail");
    assert!(matches!(err, AnalysisError::InvalidPattern { .. }));
}

#[test]
fn test_root_not_found() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let missing = temp.path().join("does-not-exist");

    let err = Analyzer::new()
        .root(&missing)
        .analyze()
        .expect_err("Missing root should fail");
    assert!(matches!(err, AnalysisError::RootNotFound(_)));
}

#[test]
fn test_invalid_option() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let err = Analyzer::new()
        .root(temp.path())
        .max_files(0)
        .analyze()
        .expect_err("Zero file budget should fail");
    assert!(matches!(err, AnalysisError::InvalidOption { field: "maxFiles", .. }));
}

#[test]
fn test_max_files_truncation_warns() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("a.py", "x = 1\n"), ("b.py", "x = 2\n"), ("c.py", "x = 3\n")],
    );

    let result = Analyzer::new()
        .root(&root)
        .max_files(2)
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.file_count(), 2);
    assert!(result.has_warnings());
    assert!(result.warnings.iter().any(|w| w.contains("File limit of 2")));
}

#[test]
fn test_analysis_is_deterministic() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_mixed_project(&temp);

    let first = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("First run should succeed");
    let second = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Second run should succeed");

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_convenience_analyze() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_python_cycle(&temp);

    let result = crate::analyze(&root, None, None).expect("Analysis should succeed");
    assert_eq!(result.mode, AnalysisMode::Full);
    assert_eq!(result.cycles.len(), 1);
    assert_eq!(result.to_string(), "2 files, 4 lines, 1 cycles, 1 issues");
}

#[test]
fn test_review_java_tree() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            (
                "src/Service.java",
                "public class Wrong {\n    String password = \"hunter2\";\n    public void Run() {}\n}\n",
            ),
            ("src/notes.py", "password = 'x'\n"),
        ],
    );

    let report = Analyzer::new()
        .root(&root)
        .review(CheckSet::All)
        .expect("Review should succeed");

    assert_eq!(report.files, 1);
    assert_eq!(report.score, 83);
    assert_eq!(report.count(Severity::Critical), 1);
    assert!(report.warnings.is_empty());

    let naming_only = Analyzer::new()
        .root(&root)
        .review(CheckSet::Naming)
        .expect("Review should succeed");
    assert!(naming_only.issues.iter().all(|i| i.category == "naming"));
}
