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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Warning threshold must be at most {max} days (got {actual})")]
    WarningThresholdTooLarge { max: u32, actual: u32 },

    #[error("Recent payment window must be between 1 and {max} days (got {actual})")]
    InvalidRecentWindow { max: u32, actual: u32 },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Fixed clock instant is not RFC 3339: {0}")]
    InvalidFixedNow(String),
}
