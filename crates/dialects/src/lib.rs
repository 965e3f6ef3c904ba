//! # Dialects
//!
//! Built-in message factories, one per FIX family, registered in the
//! process-wide module table as `fixcore-dialects`.
//!
//! `DefaultMessageFactory::new()` picks them up automatically once this
//! crate is linked; `builtin_factories()` returns the same set for explicit
//! construction.

#[macro_use]
mod macros;

pub mod custom;
pub mod factories;
pub mod groups;

use std::sync::Arc;

use contracts::MessageFactory;
use message_factory::ExportedType;

pub use custom::CustomGroupMessageFactory;
pub use factories::{
    Fix40MessageFactory, Fix41MessageFactory, Fix42MessageFactory, Fix43MessageFactory,
    Fix44MessageFactory, Fix50MessageFactory, Fix50Sp1MessageFactory, Fix50Sp2MessageFactory,
    Fixt11MessageFactory,
};
pub use groups::GroupSpec;

/// Module name in the provider table
pub const MODULE_NAME: &str = "fixcore-dialects";

message_factory::register_module!(
    MODULE_NAME,
    [
        ExportedType::factory::<Fix40MessageFactory>(),
        ExportedType::factory::<Fix41MessageFactory>(),
        ExportedType::factory::<Fix42MessageFactory>(),
        ExportedType::factory::<Fix43MessageFactory>(),
        ExportedType::factory::<Fix44MessageFactory>(),
        ExportedType::factory::<Fix50MessageFactory>(),
        ExportedType::factory::<Fix50Sp1MessageFactory>(),
        ExportedType::factory::<Fix50Sp2MessageFactory>(),
        ExportedType::factory::<Fixt11MessageFactory>(),
        ExportedType::factory_with_args::<CustomGroupMessageFactory>(),
        ExportedType::plain::<GroupSpec>(),
    ]
);

/// Every built-in factory, in registration order
pub fn builtin_factories() -> Vec<Arc<dyn MessageFactory>> {
    vec![
        Arc::new(Fix40MessageFactory),
        Arc::new(Fix41MessageFactory),
        Arc::new(Fix42MessageFactory),
        Arc::new(Fix43MessageFactory),
        Arc::new(Fix44MessageFactory),
        Arc::new(Fix50MessageFactory),
        Arc::new(Fix50Sp1MessageFactory),
        Arc::new(Fix50Sp2MessageFactory),
        Arc::new(Fixt11MessageFactory),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use message_factory::{loaded_modules, DefaultMessageFactory};

    #[test]
    fn test_module_registered() {
        let modules = loaded_modules();
        let dialects = modules
            .iter()
            .find(|m| m.name() == MODULE_NAME)
            .expect("dialects module registered");
        assert_eq!(dialects.exports().len(), 11);
    }

    #[test]
    fn test_scan_instantiates_default_constructible_factories() {
        let modules: Vec<_> = loaded_modules()
            .into_iter()
            .filter(|m| m.name() == MODULE_NAME)
            .collect();
        let factory = DefaultMessageFactory::from_modules(&modules);

        assert_eq!(
            factory.supported_begin_strings(),
            vec![
                "FIX.4.0",
                "FIX.4.1",
                "FIX.4.2",
                "FIX.4.3",
                "FIX.4.4",
                "FIX.5.0",
                "FIX.5.0SP1",
                "FIX.5.0SP2",
                "FIXT.1.1",
            ]
        );
    }
}
