//! SessionSettings - per-session key/value configuration
//!
//! Produced by `config_loader`, consumed by log factories.

use std::collections::BTreeMap;

use crate::{ContractError, SessionId};

/// Directory for file-backed session logs
pub const FILE_LOG_PATH: &str = "FileLogPath";
pub const BEGIN_STRING: &str = "BeginString";
pub const SENDER_COMP_ID: &str = "SenderCompID";
pub const TARGET_COMP_ID: &str = "TargetCompID";
pub const SESSION_QUALIFIER: &str = "SessionQualifier";

/// Flat string dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    values: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get a required string value
    ///
    /// # Errors
    /// Returns `ContractError::SettingNotFound` if the key is absent
    pub fn get_string(&self, key: &str) -> Result<&str, ContractError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ContractError::setting_not_found(key))
    }

    /// Copy every entry of `other` into `self`, overriding existing keys
    pub fn merge(&mut self, other: &Dictionary) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}

/// Default settings plus per-session overrides
#[derive(Debug, Clone, Default)]
pub struct SessionSettings {
    default: Dictionary,
    sessions: BTreeMap<SessionId, Dictionary>,
}

impl SessionSettings {
    pub fn new(default: Dictionary) -> Self {
        Self {
            default,
            sessions: BTreeMap::new(),
        }
    }

    pub fn default_settings(&self) -> &Dictionary {
        &self.default
    }

    /// Register a session's own settings
    pub fn set_session(&mut self, session_id: SessionId, settings: Dictionary) {
        self.sessions.insert(session_id, settings);
    }

    /// Merged settings (defaults overridden by the session's own)
    ///
    /// # Errors
    /// Returns `ContractError::SessionNotFound` for an unknown session
    pub fn get(&self, session_id: &SessionId) -> Result<Dictionary, ContractError> {
        let own = self
            .sessions
            .get(session_id)
            .ok_or_else(|| ContractError::SessionNotFound {
                session_id: session_id.to_string(),
            })?;
        let mut merged = self.default.clone();
        merged.merge(own);
        Ok(merged)
    }

    pub fn session_ids(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.keys()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
