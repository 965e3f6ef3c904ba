//! SessionId - session identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a FIX session
///
/// Displayed as `BEGIN:SENDER->TARGET[:QUALIFIER]`.
///
/// # Examples
/// ```
/// use contracts::SessionId;
///
/// let id = SessionId::new("FIX.4.4", "BANZAI", "EXEC");
/// assert_eq!(id.to_string(), "FIX.4.4:BANZAI->EXEC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId {
    pub begin_string: String,
    pub sender_comp_id: String,
    pub target_comp_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_qualifier: Option<String>,
}

impl SessionId {
    pub fn new(
        begin_string: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
    ) -> Self {
        Self {
            begin_string: begin_string.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
            session_qualifier: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.session_qualifier = Some(qualifier.into());
        self
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.begin_string, self.sender_comp_id, self.target_comp_id
        )?;
        if let Some(qualifier) = &self.session_qualifier {
            write!(f, ":{qualifier}")?;
        }
        Ok(())
    }
}
