//! Service configuration

mod loader;
mod types;

pub use loader::{CONFIG_ENV_PREFIX, ConfigLoader, DEFAULT_CONFIG_FILENAME};
pub use types::{AppConfig, AuthConfig, JwtConfig, LoggingConfig, ServerConfig};
