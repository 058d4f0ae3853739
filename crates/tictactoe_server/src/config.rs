//! Server configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, `TICTACTOE_*` environment variables, then whatever
//! the command line sets explicitly.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "TICTACTOE_HOST";
/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "TICTACTOE_PORT";

/// Configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    host: String,

    /// Port to bind to.
    port: u16,

    /// Default tracing filter, used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info,tictactoe_server=debug".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads defaults or `path`, then applies the process environment.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies `TICTACTOE_HOST` / `TICTACTOE_PORT` as returned by `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn apply_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_VAR) {
            debug!(%host, "Host overridden by environment");
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port.trim().parse().map_err(|e| {
                ConfigError::new(format!("Invalid {} value {:?}: {}", PORT_VAR, port, e))
            })?;
            debug!(port = self.port, "Port overridden by environment");
        }
        Ok(self)
    }

    /// `host:port` string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 3000);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .apply_env_from(|key| match key {
                HOST_VAR => Some("0.0.0.0".to_string()),
                PORT_VAR => Some(" 8080 ".to_string()),
                _ => None,
            })
            .expect("valid overrides");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_in_env() {
        let err = ServerConfig::default()
            .apply_env_from(|key| (key == PORT_VAR).then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(err.message.contains(PORT_VAR));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_setters_chain() {
        let config = ServerConfig::default()
            .with_port(4000)
            .with_log_filter("warn".to_string());
        assert_eq!(*config.port(), 4000);
        assert_eq!(config.log_filter(), "warn");
    }
}
