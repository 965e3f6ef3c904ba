//! Message factory error types

use std::path::PathBuf;

use thiserror::Error;

/// Plugin discovery error
///
/// Never surfaced to factory callers; collected and logged by discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Listing the plugin directory failed
    #[error("failed to scan plugin directory {}: {source}", dir.display())]
    ScanFailed {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A plugin file was found but could not be loaded
    #[error("failed to load plugin {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Dynamic loading is not available in this build
    #[error("plugin loading disabled, skipped {}", path.display())]
    Unsupported { path: PathBuf },
}

impl DiscoveryError {
    /// Create plugin load error
    pub fn load_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LoadFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, DiscoveryError>;
