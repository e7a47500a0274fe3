use scry_analysis::{
    DEFAULT_COMPLEXITY_THRESHOLD, DEFAULT_CYCLE_LIMIT, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES,
};
use std::path::PathBuf;

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "scry.config.json";

/// Upper bound accepted for `cycleLimit`.
pub const MAX_CYCLE_LIMIT: usize = 1000;

pub fn default_path() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

pub fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

pub fn default_cycle_limit() -> usize {
    DEFAULT_CYCLE_LIMIT
}

pub fn default_complexity_threshold() -> u32 {
    DEFAULT_COMPLEXITY_THRESHOLD
}
