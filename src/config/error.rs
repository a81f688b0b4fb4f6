//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Reciprocal tolerance must be in [0, 1), got {0}")]
    InvalidTolerance(f64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
