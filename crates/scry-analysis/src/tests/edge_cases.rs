//! Edge case tests for unusual files and roots.

use std::fs;

use super::test_helpers::*;
use crate::issues::CATEGORY_IO;
use crate::{Analyzer, Severity};
use tempfile::TempDir;

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let result = Analyzer::new()
        .root(temp.path())
        .analyze()
        .expect("Empty directory should analyze");

    assert_eq!(result.file_count(), 0);
    assert_eq!(result.total_lines(), 0);
    assert_eq!(result.average_complexity(), 0.0);
    assert!(result.issues.is_empty());
    assert!(result.is_ok());
}

#[test]
fn test_empty_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(&temp, &[("empty.py", "")]);

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    let module = result.module("empty.py").expect("empty file is recorded");
    assert_eq!(module.size, 0);
    assert_eq!(module.lines, 1);
    assert_eq!(module.complexity, 1);
    assert!(module.imports.is_empty());
}

#[test]
fn test_binary_file_has_no_facts() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();
    fs::write(root.join("blob.py"), b"import os\0\x01\x02if x:\n").expect("Failed to write");

    let result = Analyzer::new()
        .root(root)
        .analyze()
        .expect("Analysis should succeed");

    let module = result.module("blob.py").expect("binary file is recorded");
    assert!(module.error.is_none());
    assert!(module.imports.is_empty());
    assert_eq!(module.complexity, 1);
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();
    fs::write(root.join("bad.py"), b"import os\nname = '\xff\xfe'\n").expect("Failed to write");

    let result = Analyzer::new()
        .root(root)
        .analyze()
        .expect("Analysis should succeed");

    let module = result.module("bad.py").expect("file is recorded");
    assert!(module.error.is_none());
    assert_eq!(module.imports, vec!["os"]);
}

#[test]
fn test_oversized_file_is_recorded_with_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("big.py", "import os\nimport sys\n"), ("ok.py", "x\n")],
    );

    let result = Analyzer::new()
        .root(&root)
        .max_file_size(5)
        .analyze()
        .expect("Analysis should succeed");

    let big = result.module("big.py").expect("oversized file is recorded");
    assert!(big.has_error());
    assert!(big.imports.is_empty());
    assert_eq!(big.complexity, 1);

    let io: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.category == CATEGORY_IO)
        .collect();
    assert_eq!(io.len(), 1);
    assert_eq!(io[0].location, "big.py");
    assert_eq!(io[0].severity, Severity::Minor);

    let ok = result.module("ok.py").expect("small file is recorded");
    assert!(!ok.has_error());
}

#[test]
fn test_unsupported_extensions_are_ignored() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("notes.txt", "import os\n"), ("Makefile", "all:\n"), ("a.py", "")],
    );

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.file_count(), 1);
    assert!(result.module("a.py").is_some());
}

#[test]
fn test_single_file_root() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(&temp, &[("pkg/main.py", "import os\n")]);

    let result = Analyzer::new()
        .root(root.join("pkg/main.py"))
        .analyze()
        .expect("Single file should analyze");

    assert_eq!(result.file_count(), 1);
    assert_eq!(result.modules[0].path, "main.py");
    assert_eq!(result.modules[0].directory(), ".");
}

#[test]
fn test_self_import() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(&temp, &[("loop.py", "import loop\n")]);

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.cycles.len(), 1);
    assert!(result.cycles[0].is_self_import());
    assert_eq!(result.cycles[0].format_chain(), "loop -> loop");
}

#[test]
fn test_same_stem_in_different_directories() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[("a/util.py", "import helpers\n"), ("b/helpers.py", "import util\n")],
    );

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.cycles.len(), 1);
    assert_eq!(result.cycles[0].len(), 2);
}

#[test]
fn test_cycle_limit() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("a.py", "import b\n"),
            ("b.py", "import a\n"),
            ("c.py", "import d\n"),
            ("d.py", "import c\n"),
        ],
    );

    let result = Analyzer::new()
        .root(&root)
        .cycle_limit(1)
        .analyze()
        .expect("Analysis should succeed");

    assert_eq!(result.cycles.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_symlinks_files_followed_directories_not() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let outside = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(&temp, &[("src/a.py", "import shared\n")]);
    fs::write(outside.path().join("shared.py"), "import os\n").expect("Failed to write");

    symlink(&root, root.join("src/loop")).expect("Failed to link directory");
    symlink(outside.path().join("shared.py"), root.join("src/shared.py"))
        .expect("Failed to link file");

    let result = Analyzer::new()
        .root(&root)
        .analyze()
        .expect("Analysis should terminate");

    let paths: Vec<&str> = result.modules.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(paths, vec!["src/a.py", "src/shared.py"]);
    assert!(paths.iter().all(|p| !p.contains("loop")));

    let linked = result.module("src/shared.py").expect("linked file is recorded");
    assert!(linked.error.is_none());
    assert_eq!(linked.imports, vec!["os"]);
}
