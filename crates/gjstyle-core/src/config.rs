// Rust guideline compliant 2026-10-14

//! Configuration management for gjstyle.

use crate::models::DEFAULT_API_VERSION;
use crate::optimize::OptimizeOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for rendering behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Api version assigned to new envelopes.
    #[serde(default = "default_api_version")]
    pub default_api_version: String,

    /// Whether `data` is dropped when `error` is also present.
    #[serde(default = "default_enforce_error_precedence")]
    pub enforce_error_precedence: bool,

    /// Whether rendered JSON is pretty printed.
    #[serde(default)]
    pub pretty: bool,

    /// Log level for command-line tools.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_enforce_error_precedence() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_api_version: default_api_version(),
            enforce_error_precedence: default_enforce_error_precedence(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if given and present
    /// 3. Environment variables with `GJSTYLE_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| p.exists()) {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `GJSTYLE_DEFAULT_API_VERSION` - Api version for new envelopes
    /// - `GJSTYLE_ENFORCE_ERROR_PRECEDENCE` - Drop data next to errors (true/false)
    /// - `GJSTYLE_PRETTY` - Pretty print output (true/false)
    /// - `GJSTYLE_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("GJSTYLE_DEFAULT_API_VERSION") {
            self.default_api_version = val;
        }

        if let Ok(val) = std::env::var("GJSTYLE_ENFORCE_ERROR_PRECEDENCE") {
            self.enforce_error_precedence = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "GJSTYLE_ENFORCE_ERROR_PRECEDENCE must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("GJSTYLE_PRETTY") {
            self.pretty = val.parse().map_err(|_| {
                Error::InvalidConfig("GJSTYLE_PRETTY must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("GJSTYLE_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_api_version is blank
    /// - log_level is not a known level
    fn validate(&self) -> Result<()> {
        if self.default_api_version.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_api_version cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join("/"),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the optimizer options implied by this configuration.
    pub fn optimize_options(&self) -> OptimizeOptions {
        OptimizeOptions {
            enforce_error_precedence: self.enforce_error_precedence,
        }
    }
}
