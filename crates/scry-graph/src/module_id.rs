use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Identity of a module inside a [`crate::DependencyGraph`].
///
/// The graph keys modules by file stem (`src/app/models.py` -> `models`), so
/// two files sharing a stem collapse into one node. This is an accepted
/// approximation of the import-token model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a module id from an arbitrary string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a module id from a file path by taking its stem.
    ///
    /// Falls back to the full lossy path when the path has no stem.
    pub fn from_path(path: &Path) -> Self {
        match path.file_stem() {
            Some(stem) => Self(stem.to_string_lossy().into_owned()),
            None => Self(path.to_string_lossy().into_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModuleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_uses_stem() {
        let id = ModuleId::from_path(Path::new("src/app/models.py"));
        assert_eq!(id.as_str(), "models");
    }

    #[test]
    fn test_from_path_without_extension() {
        let id = ModuleId::from_path(Path::new("bin/run"));
        assert_eq!(id.as_str(), "run");
    }

    #[test]
    fn test_display_matches_inner() {
        assert_eq!(ModuleId::new("core").to_string(), "core");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ModuleId::new("a")).unwrap();
        assert_eq!(json, "\"a\"");
    }
}
