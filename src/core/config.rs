//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default base URL of the Pexels API.
pub const PEXELS_API_HOST: &str = "https://api.pexels.com/v1";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Pexels upstream API configuration.
    pub pexels: PexelsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Pexels API key. There is no fallback: a missing key is a fatal
    /// startup condition, enforced when the server is constructed.
    pub pexels_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "pexels_api_key",
                &self.pexels_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Configuration for the Pexels upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PexelsConfig {
    /// Base URL of the API. Overridable for proxies and tests.
    pub host: String,
}

impl Default for PexelsConfig {
    fn default() -> Self {
        Self {
            host: PEXELS_API_HOST.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pexels-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            pexels: PexelsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server-level variables are prefixed with `MCP_` (e.g. `MCP_LOG_LEVEL`);
    /// the upstream credential keeps its conventional name, `PEXELS_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load the Pexels API key. Absence is not handled here: the server
        // constructor refuses to start without it.
        if let Ok(api_key) = std::env::var("PEXELS_API_KEY") {
            config.credentials.pexels_api_key = Some(api_key);
            info!("Pexels API key loaded from environment");
        }

        if let Ok(host) = std::env::var("PEXELS_API_HOST") {
            info!("Pexels API host override: {}", host);
            config.pexels.host = host;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("PEXELS_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.pexels_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("PEXELS_API_KEY");
        }
    }

    #[test]
    fn test_credentials_absent_without_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("PEXELS_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.pexels_api_key.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            pexels_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_pexels_host_default_and_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("PEXELS_API_HOST");
        }
        let config = Config::from_env();
        assert_eq!(config.pexels.host, PEXELS_API_HOST);

        unsafe {
            std::env::set_var("PEXELS_API_HOST", "http://localhost:9000");
        }
        let config = Config::from_env();
        assert_eq!(config.pexels.host, "http://localhost:9000");
        unsafe {
            std::env::remove_var("PEXELS_API_HOST");
        }
    }
}
