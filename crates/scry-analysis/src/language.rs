//! Supported languages and the extension table that detects them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Language of a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Go,
    Rust,
    C,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Swift,
    Shell,
    Sql,
    Yaml,
    Json,
    Markdown,
    Toml,
}

/// Extension (without the dot) to language. Discovery ignores everything else.
pub const SUPPORTED_EXTENSIONS: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("java", Language::Java),
    ("go", Language::Go),
    ("rs", Language::Rust),
    ("c", Language::C),
    ("cpp", Language::Cpp),
    ("h", Language::C),
    ("hpp", Language::Cpp),
    ("cs", Language::CSharp),
    ("rb", Language::Ruby),
    ("php", Language::Php),
    ("swift", Language::Swift),
    ("sh", Language::Shell),
    ("sql", Language::Sql),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("json", Language::Json),
    ("md", Language::Markdown),
    ("toml", Language::Toml),
];

impl Language {
    /// Look up a language by extension. Matching is case-sensitive, like the
    /// extension table itself.
    pub fn from_extension(ext: &str) -> Option<Self> {
        SUPPORTED_EXTENSIONS
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, lang)| *lang)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Shell => "shell",
            Language::Sql => "sql",
            Language::Yaml => "yaml",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Toml => "toml",
        }
    }

    /// Data and markup formats carry no control flow.
    pub fn is_data(self) -> bool {
        matches!(
            self,
            Language::Sql | Language::Yaml | Language::Json | Language::Markdown | Language::Toml
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("h"), Some(Language::C));
        assert_eq!(Language::from_extension("yml"), Some(Language::Yaml));
        assert_eq!(Language::from_extension("exe"), None);
        assert_eq!(Language::from_extension("PY"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Language::from_path(Path::new("src/lib.rs")),
            Some(Language::Rust)
        );
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new("archive.tar.gz")), None);
    }

    #[test]
    fn test_name_matches_serde() {
        for (_, lang) in SUPPORTED_EXTENSIONS {
            let json = serde_json::to_string(lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.name()));
        }
    }

    #[test]
    fn test_data_languages() {
        assert!(Language::Json.is_data());
        assert!(!Language::Python.is_data());
    }
}
