//! Configuration for the prediction server.
//!
//! Settings come from an optional TOML file, then environment overrides.
//! The generation-service credential is required; loading fails without it
//! so the process aborts before binding.

use predictx_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the generation-service API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment override for the bind address
pub const BIND_ADDRESS_ENV: &str = "PREDICTX_BIND_ADDRESS";

/// Environment override for the bind port
pub const BIND_PORT_ENV: &str = "PREDICTX_BIND_PORT";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Field present but unusable
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Field or variable name
        field: String,
        /// Offending value
        value: String,
    },
}

/// Server configuration loaded from TOML and environment
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Generation model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation API
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Per-call timeout for the generation API, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// API credential; usually supplied through `GEMINI_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            model: default_model(),
            api_endpoint: default_api_endpoint(),
            request_timeout_secs: default_request_timeout(),
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file, without validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load, apply process environment overrides, and validate
    ///
    /// This is the single fallible initialization step of the server.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())?.validated()
    }

    /// Apply environment overrides from `lookup`
    ///
    /// Empty values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(address) = get(BIND_ADDRESS_ENV) {
            self.bind_address = address;
        }
        if let Some(port) = get(BIND_PORT_ENV) {
            self.bind_port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: BIND_PORT_ENV.to_string(),
                value: port.clone(),
            })?;
        }

        Ok(self)
    }

    /// Check required fields
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.api_key().is_none() {
            return Err(ConfigError::MissingField(API_KEY_ENV.to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::MissingField("model".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(self)
    }

    /// The API key, if present and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Generation call timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Create a configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            api_key: Some("test-key-do-not-use-in-production".to_string()),
            ..Self::default()
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 3000);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout_secs, 60);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let result = ServerConfig::default().with_env(env(&[])).unwrap().validated();
        match result {
            Err(ConfigError::MissingField(field)) => assert_eq!(field, "GEMINI_API_KEY"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_api_key_fails() {
        let result = ServerConfig::default()
            .with_env(env(&[(API_KEY_ENV, "   ")]))
            .unwrap()
            .validated();
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_env_supplies_api_key() {
        let config = ServerConfig::default()
            .with_env(env(&[(API_KEY_ENV, "secret")]))
            .unwrap()
            .validated()
            .unwrap();
        assert_eq!(config.api_key(), Some("secret"));
    }

    #[test]
    fn test_env_overrides_bind() {
        let config = ServerConfig::default()
            .with_env(env(&[(BIND_ADDRESS_ENV, "0.0.0.0"), (BIND_PORT_ENV, "8080")]))
            .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_override() {
        let result = ServerConfig::default().with_env(env(&[(BIND_PORT_ENV, "http")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..ServerConfig::default_test_config()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            model = "gemini-2.5-pro"
            request_timeout_secs = 20
            api_key = "file-key"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.api_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
        assert_eq!(config.api_key(), Some("file-key"));
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let config: ServerConfig = toml::from_str(r#"api_key = "file-key""#).unwrap();
        let config = config.with_env(env(&[(API_KEY_ENV, "env-key")])).unwrap();
        assert_eq!(config.api_key(), Some("env-key"));
    }
}
