#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for buildsnag
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/buildsnag/config.toml)
//! - Environment variables
//! - CLI flags (applied by the binary)

pub mod constants;
mod sections;

pub use crate::sections::{DefaultsConfig, GeneralConfig, NetworkConfig};
pub use constants::BUILD_API_URL;

use buildsnag_errors::{ConfigError, Error};
use buildsnag_types::{ColorChoice, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir
            .join(constants::APP_DIR)
            .join(constants::CONFIG_FILE))
    }

    /// Directory for debug log files
    #[must_use]
    pub fn logs_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(constants::APP_DIR)
            .join(constants::LOGS_SUBDIR)
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    /// Values are not checked here; call [`Config::validate`] once every
    /// override has been applied.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(|e| {
            ConfigError::ParseError {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        self.merge_env_from(|name| std::env::var(name).ok())
    }

    /// Merge overrides from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value that cannot be parsed.
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{}{suffix}", constants::ENV_PREFIX);
            lookup(&name).map(|value| (name, value))
        };

        // BUILDSNAG_OUTPUT
        if let Some((field, output)) = var("OUTPUT") {
            self.general.default_output = match output.as_str() {
                "plain" => OutputFormat::Plain,
                "tty" => OutputFormat::Tty,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field,
                        value: output,
                    }
                    .into())
                }
            };
        }

        // BUILDSNAG_COLOR
        if let Some((field, color)) = var("COLOR") {
            self.general.color = match color.as_str() {
                "always" => ColorChoice::Always,
                "auto" => ColorChoice::Auto,
                "never" => ColorChoice::Never,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field,
                        value: color,
                    }
                    .into())
                }
            };
        }

        // BUILDSNAG_ENDPOINT
        if let Some((_, endpoint)) = var("ENDPOINT") {
            self.network.endpoint = endpoint;
        }

        // BUILDSNAG_TIMEOUT
        if let Some((field, timeout)) = var("TIMEOUT") {
            self.network.timeout = parse_seconds(field, timeout)?;
        }

        // BUILDSNAG_CONNECT_TIMEOUT
        if let Some((field, timeout)) = var("CONNECT_TIMEOUT") {
            self.network.connect_timeout = parse_seconds(field, timeout)?;
        }

        Ok(())
    }

    /// Check values that serde cannot check on its own
    ///
    /// Run after the last override so a later layer can replace a bad value
    /// from an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or a timeout is zero.
    pub fn validate(&self) -> Result<(), Error> {
        let endpoint_ok = url::Url::parse(&self.network.endpoint)
            .is_ok_and(|u| matches!(u.scheme(), "http" | "https"));
        if !endpoint_ok {
            return Err(ConfigError::InvalidValue {
                field: "network.endpoint".to_string(),
                value: self.network.endpoint.clone(),
            }
            .into());
        }
        if self.network.timeout == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.timeout".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        if self.network.connect_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.connect_timeout".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn parse_seconds(field: String, value: String) -> Result<u64, Error> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { field, value }.into())
}
