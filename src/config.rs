//! Configuration module for loading and parsing TOML configuration files.

use moneyforward_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API client configuration.
    pub client: ClientSettings,
}

/// API client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the API.
    pub base_url: String,
    /// Session cookie. Usually supplied through `MONEYFORWARD_COOKIE` instead.
    pub cookie: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie: None,
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientSettings {
    /// Builds the client configuration, letting command-line values win.
    #[must_use]
    pub fn to_client_config(&self, cookie: Option<&str>, base_url: Option<&str>) -> ClientConfig {
        ClientConfig {
            base_url: base_url.unwrap_or(&self.base_url).to_string(),
            cookie: cookie
                .or(self.cookie.as_deref())
                .unwrap_or_default()
                .to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
            headers: self
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        let client = &self.client;

        if let Err(e) = url::Url::parse(&client.base_url) {
            return Err(ConfigError::InvalidValue(format!(
                "client.base_url {:?}: {}",
                client.base_url, e
            )));
        }
        if client.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "client.timeout_secs must be positive".to_string(),
            ));
        }
        if client.headers.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(
                "client.headers names cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
