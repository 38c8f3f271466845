//! Configuration module for picklist
//!
//! Manages user preferences such as the debounce delay and output format.
//! Configuration is stored in the user's config directory and can be
//! overridden with `PICKLIST_*` environment variables.

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How confirmed selections are printed
#[derive(ValueEnum, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One id per line
    #[default]
    Ids,
    /// One name per line
    Names,
    /// JSON array of items
    Json,
}

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_multi_select() -> bool {
    true
}

fn default_prompt() -> String {
    "Search...".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PicklistConfig {
    /// Quiet period before a typed query is applied, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Allow toggling more than one item
    #[serde(default = "default_multi_select")]
    pub multi_select: bool,

    /// Placeholder shown in the search bar
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Default output format for confirmed selections
    #[serde(default)]
    pub output: OutputFormat,

    /// Log filter directive (e.g. "info", "picklist=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory for log files (defaults to the user's cache directory)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for PicklistConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            multi_select: default_multi_select(),
            prompt: default_prompt(),
            output: OutputFormat::default(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl PicklistConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("picklist").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or if
    /// an environment override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("PICKLIST").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Debounce delay as a `Duration`
    #[must_use]
    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Directory log files are written to
    #[must_use]
    pub fn log_directory(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("picklist")
        })
    }
}
