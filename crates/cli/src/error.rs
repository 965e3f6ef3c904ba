//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Settings file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Settings file rejected
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    /// No provider for the requested begin string
    #[error(transparent)]
    Factory(#[from] contracts::FactoryError),
}

impl CliError {
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
