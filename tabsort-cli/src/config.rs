//! Configuration file handling.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use simplelog::LevelFilter;
use tabsort::EngineConfig;

use crate::error::CliError;
use crate::paths;

/// Contents of the optional JSON config file.
///
/// ```json
/// {
///   "log_level": "debug",
///   "log_retention": 10,
///   "engine": { "sort_empty_last": true }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level when `--log-level` is not given.
    pub log_level: Option<LevelFilter>,
    /// Number of archived log files to keep.
    pub log_retention: Option<usize>,
    /// Engine settings; table files may not override these.
    pub engine: EngineConfig,
}

/// Archived log files kept when the config does not say.
pub const DEFAULT_LOG_RETENTION: usize = 25;

impl CliConfig {
    /// Archived log files to keep.
    pub fn log_retention(&self) -> usize {
        self.log_retention.unwrap_or(DEFAULT_LOG_RETENTION)
    }

    /// Load an explicit config file, or the default one if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
