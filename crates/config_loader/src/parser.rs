//! Settings file parsing
//!
//! TOML is the primary format, JSON is also accepted.

use contracts::ContractError;

use crate::schema::SettingsFile;

/// Settings file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (recommended)
    Toml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML settings
pub fn parse_toml(content: &str) -> Result<SettingsFile, ContractError> {
    toml::from_str(content).map_err(|e| ContractError::ConfigParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse JSON settings
pub fn parse_json(content: &str) -> Result<SettingsFile, ContractError> {
    serde_json::from_str(content).map_err(|e| ContractError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse settings in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<SettingsFile, ContractError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SettingValue;

    #[test]
    fn test_parse_toml_minimal() {
        let content = r#"
[default]
FileLogPath = "log"
HeartBtInt = 30
ResetOnLogon = true

[[sessions]]
BeginString = "FIX.4.4"
SenderCompID = "BANZAI"
TargetCompID = "EXEC"
SocketConnectPort = 5001
"#;
        let result = parse_toml(content);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let file = result.unwrap();
        assert_eq!(file.default.len(), 3);
        assert_eq!(file.default["HeartBtInt"], SettingValue::Integer(30));
        assert_eq!(file.default["ResetOnLogon"], SettingValue::Boolean(true));
        assert_eq!(file.sessions.len(), 1);
        assert_eq!(file.sessions[0].sender_comp_id, "BANZAI");
        assert_eq!(
            file.sessions[0].extra["SocketConnectPort"],
            SettingValue::Integer(5001)
        );
    }

    #[test]
    fn test_parse_json_minimal() {
        let content = r#"{
            "default": { "FileLogPath": "log" },
            "sessions": [{
                "BeginString": "FIXT.1.1",
                "SenderCompID": "A",
                "TargetCompID": "B",
                "SessionQualifier": "east",
                "DefaultApplVerID": "FIX.5.0SP2"
            }]
        }"#;
        let result = parse_json(content);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let file = result.unwrap();
        assert_eq!(file.sessions[0].session_qualifier.as_deref(), Some("east"));
        assert_eq!(
            file.sessions[0].extra["DefaultApplVerID"],
            SettingValue::Text("FIX.5.0SP2".into())
        );
    }

    #[test]
    fn test_parse_missing_identity_key() {
        let content = r#"
[[sessions]]
BeginString = "FIX.4.4"
SenderCompID = "BANZAI"
"#;
        assert!(matches!(
            parse_toml(content),
            Err(ContractError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_parse_toml_syntax_error() {
        let content = "invalid toml [[[";
        let result = parse_toml(content);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ContractError::ConfigParse { .. }));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("toml"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("TOML"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("json"),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
    }
}
