//! MessageSender trait - outbound send path

use crate::{Message, SessionId};

/// Sends FIX messages to connection targets
pub trait MessageSender: Send + Sync {
    /// Send `message` on the session identified by `session_id`
    ///
    /// Returns true if the message was handed to the session, false otherwise.
    fn send_to_target(&self, message: Message, session_id: &SessionId) -> bool;
}
