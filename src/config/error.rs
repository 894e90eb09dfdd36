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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Storage data directory must not be empty")]
    EmptyDataDir,

    #[error("Base URL for {0} must start with http:// or https://")]
    InvalidBaseUrl(&'static str),

    #[error("Timeout for {0} must be between 1 and 300 seconds")]
    InvalidTimeout(&'static str),

    #[error("Interval for {0} must be at least 1 second")]
    InvalidInterval(&'static str),
}
