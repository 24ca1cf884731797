use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/hero-slider/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("hero-slider").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The interval and transition durations are non-zero
    ///
    /// An interval too short for a full hand-off is allowed; see
    /// [`Config::timing_warning`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slider.interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "slider.interval_ms must be greater than zero".to_string(),
            });
        }
        if self.slider.transition_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "slider.transition_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Describes a timing problem that makes hand-offs overlap automatic advances.
    pub fn timing_warning(&self) -> Option<String> {
        let config = self.slider.slider_config();
        if config.is_timing_consistent() {
            return None;
        }
        Some(format!(
            "slider.interval_ms ({}) should exceed 2 * transition_ms + settle ({} ms); \
             automatic advances will be dropped mid-transition",
            config.interval_ms,
            config.cycle_ms()
        ))
    }
}
