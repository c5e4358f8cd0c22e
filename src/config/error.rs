//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("min_description_chars must be at least 1")]
    InvalidMinDescriptionChars,

    #[error("max_recommendations must be at least 1")]
    InvalidMaxRecommendations,

    #[error("validation_pass_score must be between 0 and 100, got {0}")]
    InvalidPassScore(u32),

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}
