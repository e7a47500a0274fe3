//! Shared test utilities for analysis tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Create a test project with the given `(path, content)` files.
///
/// Returns the project root.
pub fn create_test_project(temp: &TempDir, files: &[(&str, &str)]) -> PathBuf {
    let root = temp.path().to_path_buf();

    for (path, content) in files {
        let file_path = root.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("Failed to create parent directory for {path}"));
        }
        fs::write(&file_path, content).unwrap_or_else(|_| panic!("Failed to write file {path}"));
    }

    root
}

/// Two Python modules importing each other.
pub fn create_python_cycle(temp: &TempDir) -> PathBuf {
    create_test_project(temp, &[("a.py", "import b\n"), ("b.py", "import a\n")])
}

/// A small mixed-language project.
pub fn create_mixed_project(temp: &TempDir) -> PathBuf {
    create_test_project(
        temp,
        &[
            (
                "main.py",
                "import os\nfrom app import service\n\ndef main():\n    if os.environ:\n        service.run()\n",
            ),
            (
                "app/service.py",
                "import json\n\nclass PaymentService:\n    def run(self):\n        for x in []:\n            pass\n",
            ),
            (
                "web/index.ts",
                "import { api } from './api';\nexport function render() {}\n",
            ),
            ("web/api.ts", "export const api = async () => fetch('/x');\n"),
            ("README.md", "# Project\n"),
            ("node_modules/lib/index.js", "module.exports = {};\n"),
            ("notes.txt", "not analyzed\n"),
        ],
    )
}
