//! Structured logging with tracing
//!
//! Centralized logging setup using the tracing ecosystem, driven by
//! [`LoggingConfig`]. The `PITLANE_LOG` environment variable overrides the
//! configured level filter.

use pitlane_domain::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    // Fails fast on an unparseable level before any layer is installed.
    parse_log_level(&config.level)?;

    let filter =
        EnvFilter::try_from_env("PITLANE_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Branches because the json layer is a different type.
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    }

    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::configuration(format!("invalid log level: {other}"))),
    }
}
