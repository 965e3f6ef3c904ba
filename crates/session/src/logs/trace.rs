//! TracingSessionLog - forwards session traffic to tracing

use contracts::{LogError, SessionId, SessionLog};
use tracing::{debug, info};

/// Session log emitting one tracing event per call
pub struct TracingSessionLog {
    session: String,
}

impl TracingSessionLog {
    pub fn new(session_id: &SessionId) -> Self {
        Self {
            session: session_id.to_string(),
        }
    }
}

impl SessionLog for TracingSessionLog {
    fn clear(&mut self) -> Result<(), LogError> {
        // Nothing retained
        Ok(())
    }

    fn on_incoming(&mut self, msg: &str) -> Result<(), LogError> {
        info!(session = %self.session, direction = "incoming", msg);
        Ok(())
    }

    fn on_outgoing(&mut self, msg: &str) -> Result<(), LogError> {
        info!(session = %self.session, direction = "outgoing", msg);
        Ok(())
    }

    fn on_event(&mut self, text: &str) -> Result<(), LogError> {
        info!(session = %self.session, "{}", text);
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), LogError> {
        debug!(session = %self.session, "TracingSessionLog disposed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_log_accepts_calls_after_dispose() {
        let mut log = TracingSessionLog::new(&SessionId::new("FIX.4.2", "A", "B"));
        log.on_incoming("8=FIX.4.2").unwrap();
        log.dispose().unwrap();
        log.on_event("still fine").unwrap();
    }
}
