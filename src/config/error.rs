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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid SQL identifier for {0}")]
    InvalidIdentifier(&'static str),

    #[error("Invalid embedding dimensions")]
    InvalidEmbeddingDimensions,

    #[error("Pool size must be between 1 and 100")]
    InvalidPoolSize,

    #[error("Knowledge search limit must be at least 1")]
    InvalidSearchLimit,
}
