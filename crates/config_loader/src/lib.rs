//! # Config Loader
//!
//! Session settings loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON settings files
//! - Validate session sections
//! - Produce `SessionSettings`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::SettingsLoader;
//! use std::path::Path;
//!
//! let settings = SettingsLoader::load_from_path(Path::new("sessions.toml")).unwrap();
//! println!("Sessions: {}", settings.session_count());
//! ```

mod parser;
mod schema;
mod validate;

pub use contracts::SessionSettings;
pub use parser::ConfigFormat;
pub use schema::{SessionSection, SettingValue, SettingsFile};

use contracts::ContractError;
use std::path::Path;
use tracing::{debug, instrument};

/// Settings loader
///
/// Provides static methods to load session settings from files or strings.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<SessionSettings, ContractError> {
        Ok(Self::read_path(path)?.to_session_settings())
    }

    /// Load settings from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<SessionSettings, ContractError> {
        Ok(Self::parse_and_validate(content, format)?.to_session_settings())
    }

    /// Parse and validate a settings file without converting it
    #[instrument(name = "settings_read", fields(path = %path.display()), skip(path))]
    pub fn read_path(path: &Path) -> Result<SettingsFile, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::parse_and_validate(&content, format)
    }

    /// Serialize settings file to TOML string
    pub fn to_toml(file: &SettingsFile) -> Result<String, ContractError> {
        toml::to_string_pretty(file)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize settings file to JSON string
    pub fn to_json(file: &SettingsFile) -> Result<String, ContractError> {
        serde_json::to_string_pretty(file)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl SettingsLoader {
    /// Infer settings format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read settings file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Parse and validate settings content
    fn parse_and_validate(
        content: &str,
        format: ConfigFormat,
    ) -> Result<SettingsFile, ContractError> {
        let file = parser::parse(content, format)?;
        validate::validate(&file)?;
        debug!(sessions = file.sessions.len(), "settings validated");
        Ok(file)
    }
}
