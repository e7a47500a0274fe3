//! Layout summary: languages, directories and likely entry points.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::record::ModuleRecord;

/// File name fragments that suggest an entry point. Matched
/// case-insensitively against the file name.
pub const ENTRY_POINT_PATTERNS: &[&str] = &[
    "main.",
    "index.",
    "app.",
    "server.",
    "cli.",
    "__main__.py",
    "manage.py",
    "setup.py",
];

/// One file as listed under its directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    pub language: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureSummary {
    pub total_files: usize,
    /// Distinct directories holding files, not counting the root.
    pub total_dirs: usize,
    pub languages: BTreeMap<Language, usize>,
    /// Directory (`.` for the root) to the files directly inside it.
    pub directories: BTreeMap<String, Vec<FileEntry>>,
    /// Relative paths, in record order.
    pub entry_points: Vec<String>,
}

impl StructureSummary {
    pub fn from_records(records: &[ModuleRecord]) -> Self {
        let mut summary = Self {
            total_files: records.len(),
            ..Self::default()
        };

        for record in records {
            *summary.languages.entry(record.language).or_default() += 1;

            summary
                .directories
                .entry(record.directory().to_string())
                .or_default()
                .push(FileEntry {
                    name: record.file_name().to_string(),
                    size: record.size,
                    language: record.language,
                });

            if is_entry_point(record.file_name()) {
                summary.entry_points.push(record.path.clone());
            }
        }

        summary.total_dirs = summary.directories.keys().filter(|d| *d != ".").count();
        summary
    }

    /// Languages by file count, most common first; ties by name.
    pub fn languages_by_count(&self) -> Vec<(Language, usize)> {
        let mut langs: Vec<_> = self.languages.iter().map(|(l, c)| (*l, *c)).collect();
        langs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));
        langs
    }
}

pub fn is_entry_point(file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    ENTRY_POINT_PATTERNS.iter().any(|p| name.contains(p))
}
