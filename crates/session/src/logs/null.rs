//! NullSessionLog - discards everything

use contracts::{LogError, SessionLog};

/// Session log that records nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSessionLog;

impl SessionLog for NullSessionLog {
    fn clear(&mut self) -> Result<(), LogError> {
        Ok(())
    }

    fn on_incoming(&mut self, _msg: &str) -> Result<(), LogError> {
        Ok(())
    }

    fn on_outgoing(&mut self, _msg: &str) -> Result<(), LogError> {
        Ok(())
    }

    fn on_event(&mut self, _text: &str) -> Result<(), LogError> {
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), LogError> {
        Ok(())
    }
}
