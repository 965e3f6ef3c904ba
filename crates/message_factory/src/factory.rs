//! DefaultMessageFactory - begin string dispatcher
//!
//! Resolves the provider for a begin string and delegates message and
//! group construction to it.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use contracts::begin_string::{FIX50, FIXT11};
use contracts::{is_admin_msg_type, FactoryError, Group, Message, MessageFactory};
use tracing::{debug, instrument, warn};

use crate::module::{ExportedType, ProviderModule};
use crate::source::{AmbientModules, ExplicitProviders, ModuleScan, ProviderSource};

/// Name under which this crate registers its own exports
pub const MODULE_NAME: &str = "fixcore-message-factory";

crate::register_module!(
    MODULE_NAME,
    [
        ExportedType::factory::<DefaultMessageFactory>(),
        ExportedType::abstract_factory::<dyn MessageFactory>(),
    ]
);

/// Message factory dispatching on begin string
///
/// The registry is built once at construction and never mutated, so a
/// single instance can be shared across threads without locking.
///
/// When two providers declare the same begin string, the one registered
/// later replaces the earlier one.
pub struct DefaultMessageFactory {
    factories: HashMap<String, Arc<dyn MessageFactory>>,
}

impl DefaultMessageFactory {
    /// Discover plugins (once per process) and use every loaded module
    pub fn new() -> Self {
        Self::from_source(&AmbientModules::default())
    }

    /// Use the given providers
    pub fn from_factories(factories: impl IntoIterator<Item = Arc<dyn MessageFactory>>) -> Self {
        Self::from_source(&ExplicitProviders::new(factories))
    }

    /// Instantiate every message factory exported by `modules`
    pub fn from_modules(modules: &[ProviderModule]) -> Self {
        Self::from_source(&ModuleScan::new(modules))
    }

    #[instrument(name = "default_message_factory_build", skip(source))]
    pub fn from_source(source: &dyn ProviderSource) -> Self {
        let factories = Self::build_registry(source.providers());
        debug!(begin_strings = factories.len(), "message factory registry built");
        Self { factories }
    }

    fn build_registry(
        providers: Vec<Arc<dyn MessageFactory>>,
    ) -> HashMap<String, Arc<dyn MessageFactory>> {
        let mut registry: HashMap<String, Arc<dyn MessageFactory>> = HashMap::new();
        for factory in providers {
            for version in factory.supported_begin_strings() {
                if registry.insert(version.clone(), Arc::clone(&factory)).is_some() {
                    debug!(begin_string = %version, "begin string declared again, later provider wins");
                }
            }
        }
        registry
    }

    /// Provider registered for exactly `key`, without aliasing
    pub fn provider(&self, key: &str) -> Option<&Arc<dyn MessageFactory>> {
        self.factories.get(key)
    }

    /// Registry key for a message request
    ///
    /// FIXT.1.1 application messages are looked up under FIX.5.0; the exact
    /// FIX.5.0 service pack is not negotiated here.
    fn message_key<'a>(begin_string: &'a str, msg_type: &str) -> &'a str {
        if begin_string == FIXT11 && !is_admin_msg_type(msg_type) {
            FIX50
        } else {
            begin_string
        }
    }

    /// Registry key for a group request; FIXT.1.1 always maps to FIX.5.0
    fn group_key(begin_string: &str) -> &str {
        if begin_string == FIXT11 {
            FIX50
        } else {
            begin_string
        }
    }

    /// Every begin string declared by a registered provider, sorted,
    /// comma-separated; `None` if nothing is registered
    fn supported_summary(&self) -> String {
        let supported: BTreeSet<String> = self
            .factories
            .values()
            .flat_map(|factory| factory.supported_begin_strings())
            .collect();

        if supported.is_empty() {
            "None".to_string()
        } else {
            supported.into_iter().collect::<Vec<_>>().join(", ")
        }
    }
}

impl Default for DefaultMessageFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageFactory for DefaultMessageFactory {
    fn supported_begin_strings(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.factories.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn create(&self, begin_string: &str, msg_type: &str) -> Message {
        let key = Self::message_key(begin_string, msg_type);

        match self.factories.get(key) {
            Some(factory) => {
                observability::record_message_created(Some(key));
                factory.create(begin_string, msg_type)
            }
            None => {
                debug!(begin_string, msg_type, "no message factory, returning bare message");
                observability::record_message_created(None);
                Message::with_msg_type(msg_type)
            }
        }
    }

    fn create_group(
        &self,
        begin_string: &str,
        msg_type: &str,
        counter_tag: u32,
    ) -> Result<Option<Group>, FactoryError> {
        let key = Self::group_key(begin_string);

        if let Some(factory) = self.factories.get(key) {
            return factory.create_group(begin_string, msg_type, counter_tag);
        }

        let err = FactoryError::unsupported_version(begin_string, self.supported_summary());
        warn!(error = %err, msg_type, counter_tag, "group requested for unsupported version");
        observability::record_group_unsupported();
        Err(err)
    }
}
