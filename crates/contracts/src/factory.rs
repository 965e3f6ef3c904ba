//! MessageFactory trait - message construction provider
//!
//! One implementation per protocol family. The dispatcher selects the
//! provider by begin string and delegates construction to it.

use crate::{FactoryError, Group, Message};

/// Message construction provider
///
/// Implementations must be stateless: a single instance is shared by every
/// caller for the lifetime of the dispatcher.
///
/// # Example
///
/// ```ignore
/// let factory: Arc<dyn MessageFactory> = Arc::new(Fix44MessageFactory);
/// let order = factory.create("FIX.4.4", "D");
/// assert_eq!(order.msg_type(), Some("D"));
/// ```
pub trait MessageFactory: Send + Sync {
    /// Begin strings this provider handles
    fn supported_begin_strings(&self) -> Vec<String>;

    /// Create a message of the given type
    fn create(&self, begin_string: &str, msg_type: &str) -> Message;

    /// Create a repeating group of `msg_type` announced by `counter_tag`
    ///
    /// Returns `Ok(None)` if the provider has no such group.
    ///
    /// # Errors
    /// Returns `FactoryError` when the request cannot be served at all
    fn create_group(
        &self,
        begin_string: &str,
        msg_type: &str,
        counter_tag: u32,
    ) -> Result<Option<Group>, FactoryError>;
}
