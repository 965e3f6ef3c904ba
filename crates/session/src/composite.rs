//! CompositeSessionLog - fan-out to several session logs

use contracts::{LogError, SessionLog};
use tracing::warn;

const TYPE_NAME: &str = "CompositeSessionLog";

/// Session log broadcasting every call to the logs it owns
///
/// Logs are called in registration order. A failing log aborts the call:
/// its error is returned and the logs after it are not reached.
///
/// Once disposed, every operation except `dispose` fails with
/// `LogError::Disposed` without touching the owned logs.
pub struct CompositeSessionLog {
    logs: Vec<Box<dyn SessionLog>>,
    disposed: bool,
}

impl CompositeSessionLog {
    pub fn new(logs: Vec<Box<dyn SessionLog>>) -> Self {
        Self {
            logs,
            disposed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn disposed_check(&self, operation: &'static str) -> Result<(), LogError> {
        if self.disposed {
            warn!(operation, "call on disposed session log");
            observability::record_log_disposed_access(operation);
            return Err(LogError::Disposed { object: TYPE_NAME });
        }
        Ok(())
    }

    fn broadcast(
        &mut self,
        operation: &'static str,
        mut call: impl FnMut(&mut dyn SessionLog) -> Result<(), LogError>,
    ) -> Result<(), LogError> {
        self.disposed_check(operation)?;
        for log in &mut self.logs {
            call(log.as_mut())?;
        }
        observability::record_log_fanout(operation, self.logs.len());
        Ok(())
    }
}

impl SessionLog for CompositeSessionLog {
    fn clear(&mut self) -> Result<(), LogError> {
        self.broadcast("clear", |log| log.clear())
    }

    fn on_incoming(&mut self, msg: &str) -> Result<(), LogError> {
        self.broadcast("on_incoming", |log| log.on_incoming(msg))
    }

    fn on_outgoing(&mut self, msg: &str) -> Result<(), LogError> {
        self.broadcast("on_outgoing", |log| log.on_outgoing(msg))
    }

    fn on_event(&mut self, text: &str) -> Result<(), LogError> {
        self.broadcast("on_event", |log| log.on_event(text))
    }

    /// Not guarded: a second call disposes every owned log again.
    fn dispose(&mut self) -> Result<(), LogError> {
        self.disposed = true;
        for log in &mut self.logs {
            log.dispose()?;
        }
        Ok(())
    }
}
