//! Configuration loading and management
//!
//! Configuration is a YAML document in which every key is optional:
//!
//! ```yaml
//! server:
//!   bind_address: "127.0.0.1:8080"
//! logging:
//!   filter: "info"
//! validation:
//!   item_description: no_whitespace
//! ```

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment variable naming a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "RECEIPTS_CONFIG";

/// Environment variable overriding `server.bind_address`
pub const BIND_ADDRESS_ENV: &str = "RECEIPTS_BIND_ADDRESS";

/// Complete configuration for the receipt service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Submission validation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub item_description: ItemDescriptionRule,
}

/// What an item's `shortDescription` may contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDescriptionRule {
    /// One or more characters, none of them whitespace
    #[default]
    NoWhitespace,
    /// Any text with at least one non-whitespace character
    AllowWhitespace,
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            origin: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            origin: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from the environment
    ///
    /// Reads the file named by [`CONFIG_PATH_ENV`] when set, otherwise starts
    /// from defaults, then applies [`BIND_ADDRESS_ENV`].
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(address) = std::env::var(BIND_ADDRESS_ENV) {
            config.server.bind_address = address;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address().map(|_| ())
    }

    /// The listener address as a socket address
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.bind_address".to_string(),
                value: self.server.bind_address.clone(),
                message: e.to_string(),
            })
    }
}
