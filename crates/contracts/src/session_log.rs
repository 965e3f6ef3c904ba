//! SessionLog trait - session log sink interface
//!
//! Defines the abstract interface for session logs and their factories.

use crate::{ContractError, LogError, SessionId};

/// Session log sink
///
/// All log implementations must implement this trait. Each instance is
/// owned and released by whoever created it.
pub trait SessionLog: Send {
    /// Discard everything logged so far
    fn clear(&mut self) -> Result<(), LogError>;

    /// Record a raw inbound message
    fn on_incoming(&mut self, msg: &str) -> Result<(), LogError>;

    /// Record a raw outbound message
    fn on_outgoing(&mut self, msg: &str) -> Result<(), LogError>;

    /// Record a session event
    fn on_event(&mut self, text: &str) -> Result<(), LogError>;

    /// Release resources held by the log
    ///
    /// May be called more than once; implementations must tolerate it.
    fn dispose(&mut self) -> Result<(), LogError>;
}

/// Creates a session log per session
pub trait LogFactory: Send + Sync {
    /// Create the log for `session_id`
    ///
    /// # Errors
    /// Returns error if required settings are missing or the log cannot be opened
    fn create(&self, session_id: &SessionId) -> Result<Box<dyn SessionLog>, ContractError>;
}
