//! User configuration loaded from `~/.book-list-manager/config.toml`.
//!
//! Everything is optional. A missing file means defaults, which keeps logging
//! off and polls the terminal every 250ms.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;
use thiserror::Error;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-list-manager";
/// Configuration file name stored inside the application data directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable naming a log file. Takes precedence over the file.
pub const LOG_FILE_ENV: &str = "BOOK_LIST_LOG";

const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 5_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Destination file. Logging stays disabled when unset because the TUI
    /// owns stdout and stderr.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive, e.g. `info` or `book_list_manager=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Event poll interval for the draw loop.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 250 }
    }
}

impl Config {
    /// Resolve `~/.book-list-manager/config.toml`. Falls back to the current
    /// directory when no home directory can be found.
    pub fn config_path() -> PathBuf {
        let base = BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(DATA_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join(CONFIG_FILE_NAME)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.ui.tick_ms) {
            return Err(ConfigError::Validation {
                message: format!(
                    "ui.tick_ms must be between {MIN_TICK_MS} and {MAX_TICK_MS}, got {}",
                    self.ui.tick_ms
                ),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "logging.level must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Log file after applying the `BOOK_LIST_LOG` override.
    pub fn log_file(&self) -> Option<PathBuf> {
        resolve_log_file(std::env::var_os(LOG_FILE_ENV).map(PathBuf::from), self)
    }
}

fn resolve_log_file(from_env: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    from_env
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| config.logging.file.clone())
}
