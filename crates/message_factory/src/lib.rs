//! # Message Factory
//!
//! Begin-string based message factory dispatch.
//!
//! Responsibilities:
//! - Build the begin string -> provider registry from explicit providers,
//!   given modules, or every module loaded in the process
//! - Best-effort, once-per-process plugin discovery next to the executable
//! - Resolve providers (FIXT.1.1 aliasing) and delegate construction
//!
//! ## Feature Flags
//!
//! - `dynamic-plugins`: load plugin shared libraries with `libloading`

pub mod discovery;
pub mod error;
pub mod factory;
pub mod module;
pub mod source;

#[doc(hidden)]
pub use inventory;

pub use contracts::{FactoryError, Group, Message, MessageFactory};
pub use discovery::{
    default_loader, discover_in_dir, discover_plugins, DisabledPluginLoader, DiscoveryGuard,
    DiscoveryReport, PluginLoader,
};
#[cfg(feature = "dynamic-plugins")]
pub use discovery::LibraryPluginLoader;
pub use error::{DiscoveryError, Result};
pub use factory::DefaultMessageFactory;
pub use module::{loaded_modules, ExportedType, FactoryConstructor, ModuleRegistration, ProviderModule};
pub use source::{AmbientModules, ExplicitProviders, ModuleScan, ProviderSource};
