//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_ENGINE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Analyses stored in {}", config.storage.data_dir.display());
//! ```

mod engine;
mod error;
mod logging;
mod storage;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Consistency threshold and reciprocal tolerance
    #[serde(default)]
    pub engine: EngineConfig,

    /// Analysis file location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD=0.1` -> `engine.consistency_threshold = 0.1`
    /// - `AHP_ENGINE__STORAGE__DATA_DIR=/var/lib/ahp` -> `storage.data_dir = /var/lib/ahp`
    /// - `AHP_ENGINE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD",
        "AHP_ENGINE__ENGINE__RECIPROCAL_TOLERANCE",
        "AHP_ENGINE__STORAGE__DATA_DIR",
        "AHP_ENGINE__LOGGING__LEVEL",
        "AHP_ENGINE__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD", "0.2");
        env::set_var("AHP_ENGINE__STORAGE__DATA_DIR", "/tmp/ahp");
        env::set_var("AHP_ENGINE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.consistency_threshold, 0.2);
        assert_eq!(config.engine.reciprocal_tolerance, 0.01);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/ahp"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD", "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidThreshold(1.5))
        );
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("AHP_ENGINE__ENGINE__RECIPROCAL_TOLERANCE", "tight");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
