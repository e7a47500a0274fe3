//! Reading discovered files into memory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReadError;
use crate::language::Language;

/// Bytes inspected when sniffing for binary content.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// A discovered file with its decoded content.
///
/// Lives only for the duration of one file's analysis.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the analysis root, with forward slashes.
    pub relative_path: String,
    pub language: Language,
    pub size: u64,
    pub lines: usize,
    pub content: String,
    /// Set when the first bytes contain a NUL. Binary content is never
    /// matched against extraction rules.
    pub is_binary: bool,
}

impl SourceFile {
    /// Read `path`, decoding invalid UTF-8 lossily.
    ///
    /// Files larger than `max_size` are rejected without being read.
    pub fn read(
        path: &Path,
        relative_path: String,
        language: Language,
        max_size: u64,
    ) -> Result<Self, ReadError> {
        let metadata = fs::metadata(path).map_err(|error| ReadError::Io {
            path: path.to_path_buf(),
            error,
        })?;

        let size = metadata.len();
        if size > max_size {
            return Err(ReadError::TooLarge {
                path: path.to_path_buf(),
                size,
                max: max_size,
            });
        }

        let bytes = fs::read(path).map_err(|error| ReadError::Io {
            path: path.to_path_buf(),
            error,
        })?;

        Ok(Self::from_bytes(path.to_path_buf(), relative_path, language, &bytes))
    }

    /// Build a source file from bytes already in memory.
    pub fn from_bytes(
        path: PathBuf,
        relative_path: String,
        language: Language,
        bytes: &[u8],
    ) -> Self {
        let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
        let is_binary = memchr::memchr(0, sniff).is_some();
        let content = String::from_utf8_lossy(bytes).into_owned();
        let lines = count_lines(&content);

        Self {
            path,
            relative_path,
            language,
            size: bytes.len() as u64,
            lines,
            content,
            is_binary,
        }
    }

    /// Content eligible for pattern matching; empty for binary files.
    pub fn text(&self) -> &str {
        if self.is_binary { "" } else { &self.content }
    }
}

/// Number of `\n`-separated segments, so an empty file has one line and a
/// trailing newline adds an empty final line.
pub fn count_lines(content: &str) -> usize {
    memchr::memchr_iter(b'\n', content.as_bytes()).count() + 1
}
