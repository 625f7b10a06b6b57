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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Delimiter must be a single ASCII character other than a quote or line break, got {0:?}")]
    InvalidDelimiter(String),

    #[error("Score precision must be at most {max}, got {actual}")]
    PrecisionTooLarge { max: usize, actual: usize },
}
