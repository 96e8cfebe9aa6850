//! Configuration management for flightfetcher.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! aviationstack access key is only ever read from these sources; it never
//! appears in the source tree or on the command line.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flightfetcher";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTFETCHER_`)
/// 2. TOML config file at `~/.config/flightfetcher/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// aviationstack service configuration.
    pub api: ApiConfig,
}

/// aviationstack-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Access key for the aviationstack service.
    ///
    /// There is no default; set `FLIGHTFETCHER_API_KEY` or the `key` entry
    /// under `[api]` in the config file.
    pub key: Option<String>,
    /// Base URL of the aviationstack service.
    pub url: String,
    /// Request timeout in whole seconds.
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            url: flightfetcher_aviationstack::DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `FLIGHTFETCHER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FLIGHTFETCHER_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout == 0 {
            return Err(Error::ConfigValidation {
                message: "api.timeout must be greater than 0".to_string(),
            });
        }

        if self.api.url.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "api.url must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }

    /// Get the access key, requiring it to be set and non-blank.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming both ways to supply the key when it
    /// is missing.
    pub fn require_key(&self) -> Result<&str> {
        match self.api.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::config_validation(
                "api.key is not set; export FLIGHTFETCHER_API_KEY or add `key` under [api] in the config file",
            )),
        }
    }
}
