use serde::{Deserialize, Serialize};

use crate::complexity::complexity;
use crate::extract::extract;
use crate::language::Language;
use crate::source::SourceFile;

/// Facts extracted from one file.
///
/// Identity is the relative path. Records are rebuilt from scratch on every
/// run and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    /// Relative path with forward slashes.
    pub path: String,
    pub language: Language,
    pub size: u64,
    pub lines: usize,
    pub imports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub complexity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModuleRecord {
    /// Extract names and score complexity for a file that was read.
    pub fn from_source(source: &SourceFile) -> Self {
        let text = source.text();
        let found = extract(text, source.language);

        Self {
            path: source.relative_path.clone(),
            language: source.language,
            size: source.size,
            lines: source.lines,
            imports: found.imports,
            functions: found.functions,
            classes: found.classes,
            complexity: complexity(text, source.language),
            error: None,
        }
    }

    /// Record for a file that could not be read.
    pub fn failed(path: String, language: Language, size: u64, error: impl Into<String>) -> Self {
        Self {
            path,
            language,
            size,
            lines: 0,
            imports: Vec::new(),
            functions: Vec::new(),
            classes: Vec::new(),
            complexity: 1,
            error: Some(error.into()),
        }
    }

    /// File stem, used as the module's node in the dependency graph.
    pub fn stem(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        match name.rfind('.') {
            Some(0) | None => name,
            Some(idx) => &name[..idx],
        }
    }

    /// Directory part of the path, `.` for files at the root.
    pub fn directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => ".",
        }
    }

    /// File name part of the path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
