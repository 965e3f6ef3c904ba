//! DefaultMessageSender - hands messages to a session router

use contracts::{Message, MessageSender, SessionId};
use tracing::warn;

/// Looks up live sessions and queues messages on them
pub trait SessionRouter: Send + Sync {
    /// Queue `message` on `session_id`
    ///
    /// Returns false when the session is unknown or refuses the message.
    fn route(&self, message: Message, session_id: &SessionId) -> bool;
}

/// `MessageSender` backed by a `SessionRouter`
pub struct DefaultMessageSender<R> {
    router: R,
}

impl<R: SessionRouter> DefaultMessageSender<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }
}

impl<R: SessionRouter> MessageSender for DefaultMessageSender<R> {
    fn send_to_target(&self, message: Message, session_id: &SessionId) -> bool {
        let msg_type = message.msg_type().map(str::to_string);
        let sent = self.router.route(message, session_id);
        if !sent {
            warn!(session = %session_id, msg_type = ?msg_type, "message not routed");
        }
        sent
    }
}
