//! Monitor configuration.
//!
//! Supplied once at startup and immutable afterwards. Values are layered:
//! CLI flag > environment variable > config file > default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default check interval (10 seconds).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Default transition log destination.
pub const DEFAULT_LOG_FILE: &str = "connection_log.txt";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse YAML configuration.
    #[error("failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation failed.
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Startup configuration for the monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Time between probe cycles (default: 10s).
    #[serde(with = "humantime_serde")]
    pub interval: Duration,

    /// Destination for the transition log (default: "connection_log.txt").
    pub log_file: PathBuf,

    /// Mirror transition messages to stdout (default: off).
    pub echo: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            echo: false,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::Validation(
                "check interval must be greater than zero".to_string(),
            ));
        }

        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "log file path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
