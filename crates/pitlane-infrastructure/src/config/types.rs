//! Configuration types

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Authorization configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Authorization configuration.
///
/// When `enabled` is false (the development default), the role guards admit
/// every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether role checks are enforced
    #[serde(default)]
    pub enabled: bool,

    /// JWT verification settings
    #[serde(default)]
    pub jwt: JwtConfig,
}

/// JWT verification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 secret (required when auth is enabled, min 32 chars)
    pub secret: String,
    /// Token lifetime in seconds, used when issuing local tokens
    pub expiration_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_secs: 3600,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter ("trace" through "error")
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
