//! Settings file layout
//!
//! A `[default]` table plus a `[[sessions]]` array, keyed with the usual FIX
//! session setting names.

use std::collections::BTreeMap;
use std::fmt;

use contracts::settings::{BEGIN_STRING, SENDER_COMP_ID, SESSION_QUALIFIER, TARGET_COMP_ID};
use contracts::{Dictionary, SessionId, SessionSettings};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single setting value
///
/// Numbers and booleans are accepted and stored as strings in the `Dictionary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // FIX settings spell booleans as Y/N
            Self::Boolean(true) => f.write_str("Y"),
            Self::Boolean(false) => f.write_str("N"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// A whole settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub default: BTreeMap<String, SettingValue>,

    #[serde(default)]
    pub sessions: Vec<SessionSection>,
}

/// One `[[sessions]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SessionSection {
    #[serde(rename = "BeginString")]
    #[validate(length(min = 1, message = "BeginString cannot be empty"))]
    pub begin_string: String,

    #[serde(rename = "SenderCompID")]
    #[validate(length(min = 1, message = "SenderCompID cannot be empty"))]
    pub sender_comp_id: String,

    #[serde(rename = "TargetCompID")]
    #[validate(length(min = 1, message = "TargetCompID cannot be empty"))]
    pub target_comp_id: String,

    #[serde(
        rename = "SessionQualifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub session_qualifier: Option<String>,

    /// Remaining keys override `[default]`
    #[serde(flatten)]
    pub extra: BTreeMap<String, SettingValue>,
}

impl SessionSection {
    pub fn session_id(&self) -> SessionId {
        let id = SessionId::new(
            &self.begin_string,
            &self.sender_comp_id,
            &self.target_comp_id,
        );
        match &self.session_qualifier {
            Some(qualifier) => id.with_qualifier(qualifier),
            None => id,
        }
    }

    /// The session's own dictionary, identity keys included
    pub fn dictionary(&self) -> Dictionary {
        let mut dict = to_dictionary(&self.extra);
        dict.set(BEGIN_STRING, &self.begin_string);
        dict.set(SENDER_COMP_ID, &self.sender_comp_id);
        dict.set(TARGET_COMP_ID, &self.target_comp_id);
        if let Some(qualifier) = &self.session_qualifier {
            dict.set(SESSION_QUALIFIER, qualifier);
        }
        dict
    }
}

impl SettingsFile {
    /// Convert into runtime `SessionSettings`
    pub fn to_session_settings(&self) -> SessionSettings {
        let mut settings = SessionSettings::new(to_dictionary(&self.default));
        for section in &self.sessions {
            settings.set_session(section.session_id(), section.dictionary());
        }
        settings
    }
}

fn to_dictionary(values: &BTreeMap<String, SettingValue>) -> Dictionary {
    values
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect()
}
