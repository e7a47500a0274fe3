use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that abort an analysis run.
///
/// Per-file failures never surface here: they are logged, recorded on the
/// file's [`crate::ModuleRecord`] and the run continues.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The root path passed to the analyzer does not exist.
    #[error("analysis root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but could not be resolved.
    #[error("failed to resolve analysis root '{path}': {error}")]
    RootUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// An include pattern is not a valid glob.
    #[error("invalid include pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Message from the glob compiler.
        message: String,
    },

    /// A configuration value is out of range.
    #[error("invalid analyzer option '{field}': {message}")]
    InvalidOption {
        /// Name of the option.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Failure to read a single source file. Recovered locally.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read '{path}': {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("'{path}' is {size} bytes, larger than the {max} byte limit")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}
