//! Provider modules - exported type descriptors
//!
//! Rust has no runtime reflection, so every crate that ships message
//! factories describes its public types with `ExportedType` and registers
//! the resulting `ProviderModule` in a link-time table (`register_module!`).
//! Plugins loaded from disk are appended to the same process-wide set.

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use contracts::MessageFactory;

/// No-argument constructor for an exported factory type
pub type FactoryConstructor = fn() -> Arc<dyn MessageFactory>;

fn construct<T: MessageFactory + Default + 'static>() -> Arc<dyn MessageFactory> {
    Arc::new(T::default())
}

/// Factory capability of an exported type
#[derive(Clone, Copy)]
pub struct FactoryExport {
    constructor: Option<FactoryConstructor>,
}

/// Descriptor of a public type exported by a module
#[derive(Clone)]
pub struct ExportedType {
    type_id: TypeId,
    type_name: &'static str,
    is_abstract: bool,
    factory: Option<FactoryExport>,
}

impl ExportedType {
    /// Concrete factory constructible through `Default`
    pub fn factory<T: MessageFactory + Default + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            is_abstract: false,
            factory: Some(FactoryExport {
                constructor: Some(construct::<T>),
            }),
        }
    }

    /// Concrete factory that needs constructor arguments
    pub fn factory_with_args<T: MessageFactory + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            is_abstract: false,
            factory: Some(FactoryExport { constructor: None }),
        }
    }

    /// Abstract factory surface (a trait object type), never instantiable
    pub fn abstract_factory<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            is_abstract: true,
            factory: Some(FactoryExport { constructor: None }),
        }
    }

    /// Any other exported type
    pub fn plain<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            is_abstract: false,
            factory: None,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_concrete(&self) -> bool {
        !self.is_abstract
    }

    pub fn implements_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// No-argument constructor, if the type is a factory that has one
    pub fn constructor(&self) -> Option<FactoryConstructor> {
        self.factory.and_then(|f| f.constructor)
    }
}

impl fmt::Debug for ExportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportedType")
            .field("type_name", &self.type_name)
            .field("is_abstract", &self.is_abstract)
            .field("implements_factory", &self.implements_factory())
            .field("has_constructor", &self.constructor().is_some())
            .finish()
    }
}

/// A loaded code module and its exported types
#[derive(Debug, Clone)]
pub struct ProviderModule {
    name: String,
    exports: Vec<ExportedType>,
}

impl ProviderModule {
    pub fn new(name: impl Into<String>, exports: Vec<ExportedType>) -> Self {
        Self {
            name: name.into(),
            exports,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exports(&self) -> &[ExportedType] {
        &self.exports
    }
}

/// Link-time registration entry, submitted through `register_module!`
pub struct ModuleRegistration {
    name: &'static str,
    exports: fn() -> Vec<ExportedType>,
}

impl ModuleRegistration {
    pub const fn new(name: &'static str, exports: fn() -> Vec<ExportedType>) -> Self {
        Self { name, exports }
    }

    pub fn build(&self) -> ProviderModule {
        ProviderModule::new(self.name, (self.exports)())
    }
}

inventory::collect!(ModuleRegistration);

/// Register a provider module in the process-wide table
///
/// # Example
/// ```ignore
/// message_factory::register_module!("my-dialects", [
///     ExportedType::factory::<MyFactory>(),
/// ]);
/// ```
#[macro_export]
macro_rules! register_module {
    ($name:expr, [$($export:expr),* $(,)?]) => {
        $crate::inventory::submit! {
            $crate::ModuleRegistration::new($name, || vec![$($export),*])
        }
    };
}

/// Modules loaded at runtime by plugin discovery
static RUNTIME_MODULES: RwLock<Vec<ProviderModule>> = RwLock::new(Vec::new());

pub(crate) fn add_runtime_module(module: ProviderModule) {
    RUNTIME_MODULES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(module);
}

/// Every module currently loaded in the process
///
/// Link-time registrations first, then runtime-loaded plugins in load order.
pub fn loaded_modules() -> Vec<ProviderModule> {
    let mut modules: Vec<ProviderModule> = inventory::iter::<ModuleRegistration>
        .into_iter()
        .map(ModuleRegistration::build)
        .collect();
    modules.extend(
        RUNTIME_MODULES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned(),
    );
    modules
}
