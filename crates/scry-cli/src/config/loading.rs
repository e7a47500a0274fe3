use crate::cli::{AnalyzeArgs, Mode, ReportFormat, split_list};
use crate::config::{CONFIG_FILE_NAME, ScryConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `SCRY_MAX_FILES=500`.
pub const ENV_PREFIX: &str = "SCRY_";

/// Scalar keys that may come from the environment.
const ENV_KEYS: &[&str] = &[
    "path",
    "mode",
    "format",
    "output",
    "max_files",
    "max_file_size",
    "cycle_limit",
    "complexity_threshold",
];

/// Flags the user actually passed. Unset flags are skipped so they never
/// shadow file or environment values.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity_threshold: Option<u32>,
}

impl From<&AnalyzeArgs> for CliOverrides {
    fn from(args: &AnalyzeArgs) -> Self {
        Self {
            // --file takes precedence over --path
            path: args.file.clone().or_else(|| args.path.clone()),
            exclude: args.exclude.as_deref().map(split_list),
            include: args.include.as_deref().map(split_list),
            mode: args.mode,
            format: args.format,
            output: args.output.clone(),
            max_files: args.max_files,
            max_file_size: args.max_file_size.map(|n| n as u64),
            cycle_limit: args.cycle_limit,
            complexity_threshold: args
                .complexity_threshold
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX)),
        }
    }
}

/// Convert a `snake_case` environment key to the `camelCase` config key.
///
/// ```
/// use scry_cli::config::camel_case;
///
/// assert_eq!(camel_case("max_file_size"), "maxFileSize");
/// assert_eq!(camel_case("MODE"), "mode");
/// ```
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

impl ScryConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &AnalyzeArgs) -> Result<Self> {
        let config = Self::figment(args)?
            .extract::<Self>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The merged provider chain, before extraction.
    pub fn figment(args: &AnalyzeArgs) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::config_file(args.config.as_deref())? {
            tracing::debug!("Loading config from {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| ENV_KEYS.iter().any(|k| key.as_str().eq_ignore_ascii_case(k)))
                .map(|key| camel_case(key.as_str()).into()),
        );

        Ok(figment.merge(Serialized::defaults(CliOverrides::from(args))))
    }

    /// An explicit `--config` must exist; the default file is optional.
    fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
            Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                Ok(default_path.is_file().then(|| default_path.to_path_buf()))
            }
        }
    }
}
