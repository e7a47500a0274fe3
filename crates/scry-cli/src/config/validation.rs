use crate::config::{MAX_CYCLE_LIMIT, ScryConfig};
use crate::error::{ConfigError, Result};

/// Reject blank entries in a pattern list.
pub fn validate_patterns(field: &str, patterns: &[String]) -> Result<()> {
    if let Some(blank) = patterns.iter().find(|p| p.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: format!("{:?}", blank),
            hint: "Patterns cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

impl ScryConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_files == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxFiles".to_string(),
                value: "0".to_string(),
                hint: "Must be greater than zero".to_string(),
            }
            .into());
        }

        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxFileSize".to_string(),
                value: "0".to_string(),
                hint: "Must be greater than zero".to_string(),
            }
            .into());
        }

        if !(1..=MAX_CYCLE_LIMIT).contains(&self.cycle_limit) {
            return Err(ConfigError::InvalidValue {
                field: "cycleLimit".to_string(),
                value: self.cycle_limit.to_string(),
                hint: format!("Must be between 1 and {}", MAX_CYCLE_LIMIT),
            }
            .into());
        }

        if self.complexity_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "complexityThreshold".to_string(),
                value: "0".to_string(),
                hint: "Must be greater than zero".to_string(),
            }
            .into());
        }

        if let Some(exclude) = &self.exclude {
            validate_patterns("exclude", exclude)?;
        }
        validate_patterns("include", &self.include)?;

        Ok(())
    }
}
