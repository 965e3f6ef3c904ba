//! Dialect factory macros
//!
//! Generates the unit-struct factories that only differ in begin strings,
//! header values and group table.

/// Define a stateless dialect message factory
///
/// # Usage
/// ```ignore
/// define_dialect_factory!(
///     Fix44MessageFactory,          // Factory name
///     [FIX44],                      // Begin strings served
///     FIX44,                        // Header BeginString of created messages
///     None,                         // ApplVerID for application messages
///     FIX43_GROUPS                  // Group table
/// );
/// ```
macro_rules! define_dialect_factory {
    (
        $(#[$meta:meta])*
        $factory_name:ident,
        [$($begin_string:expr),+ $(,)?],
        $header_begin_string:expr,
        $appl_ver_id:expr,
        $groups:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $factory_name;

        impl contracts::MessageFactory for $factory_name {
            fn supported_begin_strings(&self) -> Vec<String> {
                vec![$($begin_string.to_string()),+]
            }

            fn create(&self, _begin_string: &str, msg_type: &str) -> contracts::Message {
                $crate::factories::new_message($header_begin_string, $appl_ver_id, msg_type)
            }

            fn create_group(
                &self,
                _begin_string: &str,
                msg_type: &str,
                counter_tag: u32,
            ) -> Result<Option<contracts::Group>, contracts::FactoryError> {
                Ok($crate::groups::find_group($groups, msg_type, counter_tag))
            }
        }
    };
}
