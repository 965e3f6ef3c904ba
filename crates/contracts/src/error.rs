//! Layered error definitions
//!
//! Categorized by source: config / factory / log

use thiserror::Error;

/// Configuration and settings errors
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Settings Lookup Errors =====
    /// Required setting missing
    #[error("setting not found: {key}")]
    SettingNotFound { key: String },

    /// Session not present in settings
    #[error("session not found in settings: {session_id}")]
    SessionNotFound { session_id: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create missing setting error
    pub fn setting_not_found(key: impl Into<String>) -> Self {
        Self::SettingNotFound { key: key.into() }
    }
}

/// Message factory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// No provider registered for the begin string
    ///
    /// `supported` lists every registered begin string, sorted and
    /// comma-separated, or `None` when nothing is registered.
    #[error("unsupported version: {begin_string}. Supported begin strings: {supported}")]
    UnsupportedVersion {
        begin_string: String,
        supported: String,
    },
}

impl FactoryError {
    /// Create unsupported version error
    pub fn unsupported_version(
        begin_string: impl Into<String>,
        supported: impl Into<String>,
    ) -> Self {
        Self::UnsupportedVersion {
            begin_string: begin_string.into(),
            supported: supported.into(),
        }
    }
}

/// Session log errors
#[derive(Debug, Error)]
pub enum LogError {
    /// Operation on a log that has been disposed
    #[error("cannot access a disposed object: {object}")]
    Disposed { object: &'static str },

    /// Sink-specific failure
    #[error("session log '{sink}' error: {message}")]
    Sink { sink: String, message: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_display() {
        let err = FactoryError::unsupported_version("FIX.9.9", "FIX.4.2, FIX.4.4");
        assert_eq!(
            err.to_string(),
            "unsupported version: FIX.9.9. Supported begin strings: FIX.4.2, FIX.4.4"
        );
    }

    #[test]
    fn test_disposed_display() {
        let err = LogError::Disposed {
            object: "CompositeSessionLog",
        };
        assert!(err.to_string().contains("CompositeSessionLog"));
    }
}
