//! Log factories
//!
//! One factory per log kind, plus `CompositeLogFactory` which asks each
//! inner factory for a log and bundles them into a `CompositeSessionLog`.

use contracts::settings::FILE_LOG_PATH;
use contracts::{ContractError, LogFactory, SessionId, SessionLog, SessionSettings};
use tracing::{debug, instrument};

use crate::composite::CompositeSessionLog;
use crate::logs::{FileSessionLog, NullSessionLog, TracingSessionLog};

/// Creates a `FileSessionLog` under each session's `FileLogPath`
pub struct FileLogFactory {
    settings: SessionSettings,
}

impl FileLogFactory {
    pub fn new(settings: SessionSettings) -> Self {
        Self { settings }
    }
}

impl LogFactory for FileLogFactory {
    #[instrument(name = "file_log_factory_create", skip(self), fields(session = %session_id))]
    fn create(&self, session_id: &SessionId) -> Result<Box<dyn SessionLog>, ContractError> {
        let dictionary = self.settings.get(session_id)?;
        let dir = dictionary.get_string(FILE_LOG_PATH)?;
        debug!(dir, "opening file session log");
        Ok(Box::new(FileSessionLog::new(dir, session_id)?))
    }
}

/// Creates a `TracingSessionLog`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogFactory;

impl LogFactory for TracingLogFactory {
    fn create(&self, session_id: &SessionId) -> Result<Box<dyn SessionLog>, ContractError> {
        Ok(Box::new(TracingSessionLog::new(session_id)))
    }
}

/// Creates a `NullSessionLog`
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogFactory;

impl LogFactory for NullLogFactory {
    fn create(&self, _session_id: &SessionId) -> Result<Box<dyn SessionLog>, ContractError> {
        Ok(Box::new(NullSessionLog))
    }
}

/// Creates a `CompositeSessionLog` with one log per inner factory
///
/// Logs keep the order of the factories. The first factory error is
/// returned and logs already created are dropped.
pub struct CompositeLogFactory {
    factories: Vec<Box<dyn LogFactory>>,
}

impl CompositeLogFactory {
    pub fn new(factories: Vec<Box<dyn LogFactory>>) -> Self {
        Self { factories }
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl LogFactory for CompositeLogFactory {
    fn create(&self, session_id: &SessionId) -> Result<Box<dyn SessionLog>, ContractError> {
        let logs = self
            .factories
            .iter()
            .map(|factory| factory.create(session_id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Box::new(CompositeSessionLog::new(logs)))
    }
}
