//! Command implementations.

mod providers;
mod resolve;
mod validate;

pub use providers::run_providers;
pub use resolve::run_resolve;
pub use validate::run_validate;

use message_factory::DefaultMessageFactory;

/// Dispatching factory over every provider available to the process
///
/// `builtin` skips module scanning and plugin discovery.
pub(crate) fn build_factory(builtin: bool) -> DefaultMessageFactory {
    if builtin {
        DefaultMessageFactory::from_factories(dialects::builtin_factories())
    } else {
        DefaultMessageFactory::new()
    }
}
