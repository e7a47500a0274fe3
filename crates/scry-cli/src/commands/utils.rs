//! Shared helpers for command implementations.

use crate::error::{CliError, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a report, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, content).context(format!("Failed to write {}", path.display()))
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Custom(format!("Failed to get current working directory: {}", e))
    })
}

/// Fail with a friendly error when the analysis root is missing.
pub fn require_path(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}
