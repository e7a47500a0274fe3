//! File discovery with exclude/include filtering.
//!
//! Directories are walked recursively without following symlinked
//! directories. A path is kept when:
//! 1. it contains none of the exclude substrings,
//! 2. it matches at least one include pattern (substring or glob), if any
//!    were given,
//! 3. its extension is in [`crate::language::SUPPORTED_EXTENSIONS`].
//!
//! Exclusion is checked first and always wins.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{AnalysisError, Result};
use crate::language::Language;

/// Compiled exclude/include rules.
#[derive(Debug, Clone)]
pub struct FileFilter {
    excludes: Vec<String>,
    includes: Vec<IncludePattern>,
}

#[derive(Debug, Clone)]
struct IncludePattern {
    raw: String,
    glob: GlobMatcher,
    /// Absolute patterns must match the whole path; relative ones match any
    /// trailing run of path components.
    anchored: bool,
}

impl IncludePattern {
    fn matches(&self, path: &Path, path_str: &str) -> bool {
        if path_str.contains(self.raw.as_str()) {
            return true;
        }

        if self.anchored {
            return self.glob.is_match(path_str);
        }

        let components: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        (0..components.len()).any(|start| self.glob.is_match(components[start..].join("/")))
    }
}

impl FileFilter {
    /// Compile a filter. Empty patterns are ignored.
    pub fn new(excludes: &[String], includes: &[String]) -> Result<Self> {
        let excludes = excludes
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();

        let includes = includes
            .iter()
            .filter(|p| !p.is_empty())
            .map(|raw| {
                let glob = GlobBuilder::new(raw)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| AnalysisError::InvalidPattern {
                        pattern: raw.clone(),
                        message: e.to_string(),
                    })?
                    .compile_matcher();
                Ok(IncludePattern {
                    raw: raw.clone(),
                    glob,
                    anchored: raw.starts_with('/'),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { excludes, includes })
    }

    /// True when any exclude substring occurs in the path.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes.iter().any(|p| path_str.contains(p.as_str()))
    }

    /// Apply the full filter (exclude, include, extension) to a file path.
    pub fn should_include(&self, path: &Path) -> bool {
        if self.is_excluded(path) {
            return false;
        }

        if !self.includes.is_empty() {
            let path_str = path.to_string_lossy();
            if !self.includes.iter().any(|p| p.matches(path, &path_str)) {
                return false;
            }
        }

        Language::from_path(path).is_some()
    }
}

/// Outcome of a discovery walk.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Set when `max_files` stopped the walk early.
    pub truncated: bool,
    /// Entries that could not be read during the walk.
    pub warnings: Vec<String>,
}

/// Find analyzable files under `root`, which may itself be a file.
pub fn discover_files(root: &Path, filter: &FileFilter, max_files: usize) -> Discovery {
    let mut discovery = Discovery::default();

    if root.is_file() {
        if filter.should_include(root) {
            discovery.files.push(root.to_path_buf());
        }
        return discovery;
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        // Every descendant of an excluded directory contains the same
        // substring, so pruning here never changes the result.
        .filter_entry(|entry| !(entry.file_type().is_dir() && filter.is_excluded(entry.path())));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                discovery.warnings.push(format!("Skipped unreadable entry: {err}"));
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file || !filter.should_include(entry.path()) {
            continue;
        }

        if discovery.files.len() >= max_files {
            warn!("File limit of {} reached, remaining files skipped", max_files);
            discovery.truncated = true;
            break;
        }

        discovery.files.push(entry.into_path());
    }

    discovery.files.sort();
    debug!("Discovered {} files under {}", discovery.files.len(), root.display());
    discovery
}

/// Path of `file` relative to `root`, with forward slashes.
///
/// When `root` is the file itself, the file name is returned.
pub fn relative_path(root: &Path, file: &Path) -> String {
    let base = if root.is_file() {
        root.parent().unwrap_or(root)
    } else {
        root
    };

    let rel = file.strip_prefix(base).unwrap_or(file);
    let rel = path_clean::clean(rel);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
