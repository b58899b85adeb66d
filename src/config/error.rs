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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid oracle request timeout")]
    InvalidTimeout,

    #[error("Oracle endpoint must be an http(s) URL")]
    InvalidOracleEndpoint,

    #[error("Oracle model must not be empty")]
    EmptyOracleModel,

    #[error("Oracle temperature must be within [0.0, 2.0]")]
    InvalidTemperature,

    #[error("Max questions per session must be at least 1")]
    InvalidMaxQuestions,

    #[error("Session and question TTLs must be positive")]
    InvalidTtl,
}
