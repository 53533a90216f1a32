//! Server configuration for the shopd HTTP API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SHOPD_PORT` | 8080 | Server port |
//! | `SHOPD_HOST` | 127.0.0.1 | Host to bind |
//! | `SHOPD_LOG_LEVEL` | info | Log level |
//! | `SHOPD_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SHOPD_ENABLE_CORS` | true | Enable CORS |
//! | `SHOPD_CORS_ORIGINS` | * | Allowed origins |
//! | `SHOPD_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `SHOPD_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `SHOPD_DEFAULT_LIMIT` | 100 | Default list page size |
//! | `SHOPD_MAX_LIMIT` | 500 | Maximum list page size |

use clap::Parser;
use shopd_store::PageLimits;

/// Server configuration for the shopd HTTP API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "shopd")]
#[command(about = "Commerce administration API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SHOPD_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SHOPD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SHOPD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SHOPD_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SHOPD_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SHOPD_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "SHOPD_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "SHOPD_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Default number of documents per list page.
    #[arg(long, env = "SHOPD_DEFAULT_LIMIT", default_value = "100")]
    pub default_limit: u64,

    /// Maximum number of documents per list page.
    #[arg(long, env = "SHOPD_MAX_LIMIT", default_value = "500")]
    pub max_limit: u64,

    /// Seed the store with demo data on startup.
    #[arg(long, env = "SHOPD_SEED", default_value = "false")]
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            default_limit: 100,
            max_limit: 500,
            seed: false,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the pagination limits derived from this configuration.
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_limit == 0 {
            errors.push("Default limit cannot be 0".to_string());
        }

        if self.default_limit > self.max_limit {
            errors.push("Default limit cannot exceed max limit".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            default_limit: 100,
            max_limit: 500,
            seed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.enable_cors);
        assert_eq!(config.default_limit, 100);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let config = ServerConfig {
            default_limit: 600,
            max_limit: 500,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("exceed max limit")));
    }

    #[test]
    fn test_page_limits() {
        let config = ServerConfig {
            default_limit: 25,
            max_limit: 50,
            ..Default::default()
        };
        let limits = config.page_limits();
        assert_eq!(limits.default_limit, 25);
        assert_eq!(limits.max_limit, 50);
    }
}
