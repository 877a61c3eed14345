//! Configuration loader
//!
//! Merges defaults, a TOML file and `PITLANE_*` environment variables, in
//! that order, then validates the result.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pitlane_domain::error::{Error, Result};

use super::AppConfig;

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "PITLANE";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "pitlane.toml";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources.
    ///
    /// Sources merge in this order, later overriding earlier:
    /// 1. `AppConfig::default()`
    /// 2. TOML file (explicit path, or `pitlane.toml` in the working dir)
    /// 3. Environment variables (`PITLANE_SERVER_PORT`, ...)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let config_file = self.config_path.clone().or_else(|| {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            candidate.exists().then_some(candidate)
        });
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("_"));

        let config: AppConfig = figment.extract().map_err(|e| Error::Configuration {
            message: format!("failed to extract configuration: {e}"),
        })?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn validate(config: &AppConfig) -> Result<()> {
        if config.server.port == 0 {
            return Err(Error::configuration("server.port must be non-zero"));
        }
        if config.auth.enabled && config.auth.jwt.secret.len() < 32 {
            return Err(Error::configuration(
                "auth.jwt.secret must be at least 32 characters when auth is enabled",
            ));
        }
        Ok(())
    }
}
