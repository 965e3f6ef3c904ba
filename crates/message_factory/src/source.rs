//! Provider sources
//!
//! The three ways of populating the factory registry. All of them yield a
//! flat, ordered list of providers; order matters because later providers
//! override earlier ones for a shared begin string.

use std::any::TypeId;
use std::sync::Arc;

use contracts::MessageFactory;
use tracing::{debug, error, info, instrument};

use crate::discovery::{default_loader, discover_plugins, PluginLoader};
use crate::factory::DefaultMessageFactory;
use crate::module::{loaded_modules, ExportedType, ProviderModule};

/// Runtime/framework modules left out of diagnostics
const RUNTIME_MODULE_NAMES: [&str; 5] = ["std", "core", "alloc", "proc_macro", "test"];

/// Supplies the providers a registry is built from
pub trait ProviderSource {
    /// Providers in registration order
    fn providers(&self) -> Vec<Arc<dyn MessageFactory>>;
}

/// An explicitly supplied provider list
pub struct ExplicitProviders {
    factories: Vec<Arc<dyn MessageFactory>>,
}

impl ExplicitProviders {
    pub fn new(factories: impl IntoIterator<Item = Arc<dyn MessageFactory>>) -> Self {
        Self {
            factories: factories.into_iter().collect(),
        }
    }
}

impl ProviderSource for ExplicitProviders {
    fn providers(&self) -> Vec<Arc<dyn MessageFactory>> {
        self.factories.clone()
    }
}

/// Scan of a given set of modules
pub struct ModuleScan<'a> {
    modules: &'a [ProviderModule],
}

impl<'a> ModuleScan<'a> {
    pub fn new(modules: &'a [ProviderModule]) -> Self {
        Self { modules }
    }
}

impl ProviderSource for ModuleScan<'_> {
    #[instrument(
        name = "module_scan_providers",
        skip(self),
        fields(module_count = self.modules.len())
    )]
    fn providers(&self) -> Vec<Arc<dyn MessageFactory>> {
        let factory_types: Vec<&ExportedType> = self
            .modules
            .iter()
            .flat_map(ProviderModule::exports)
            .filter(|export| is_message_factory(export))
            .collect();

        if factory_types.is_empty() {
            report_empty_scan(self.modules);
        }

        factory_types
            .into_iter()
            .filter_map(|export| {
                let constructor = export.constructor()?;
                debug!(type_name = export.type_name(), "instantiating message factory");
                Some(constructor())
            })
            .collect()
    }
}

/// Every module loaded in the process, after best-effort plugin discovery
pub struct AmbientModules {
    loader: Box<dyn PluginLoader>,
}

impl AmbientModules {
    pub fn with_loader(loader: Box<dyn PluginLoader>) -> Self {
        Self { loader }
    }
}

impl Default for AmbientModules {
    fn default() -> Self {
        Self::with_loader(default_loader())
    }
}

impl ProviderSource for AmbientModules {
    fn providers(&self) -> Vec<Arc<dyn MessageFactory>> {
        discover_plugins(self.loader.as_ref());
        let modules = loaded_modules();
        ModuleScan::new(&modules).providers()
    }
}

/// Concrete, implements `MessageFactory`, has a no-argument constructor and
/// is not the dispatcher itself.
fn is_message_factory(export: &ExportedType) -> bool {
    export.type_id() != TypeId::of::<DefaultMessageFactory>()
        && export.is_concrete()
        && export.implements_factory()
        && export.constructor().is_some()
}

fn report_empty_scan(modules: &[ProviderModule]) {
    let mut names: Vec<&str> = modules
        .iter()
        .map(ProviderModule::name)
        .filter(|name| !is_runtime_module(name))
        .collect();
    names.sort_unstable();

    info!("Scanned modules:\n{}", names.join("\n"));
    error!("Could not find any modules with MessageFactory types.");
}

fn is_runtime_module(name: &str) -> bool {
    RUNTIME_MODULE_NAMES.contains(&name) || name.starts_with("std::")
}
