//! CustomGroupMessageFactory - user-defined dialect
//!
//! Serves arbitrary begin strings with a caller-supplied group table. It
//! needs constructor arguments, so module scanning never instantiates it;
//! pass it to `DefaultMessageFactory::from_factories` instead.

use contracts::{FactoryError, Group, Message, MessageFactory};

use crate::factories::new_message;
use crate::groups::{find_group, GroupSpec};

/// Message factory for a custom dialect
#[derive(Debug, Clone)]
pub struct CustomGroupMessageFactory {
    begin_strings: Vec<String>,
    groups: Vec<GroupSpec>,
}

impl CustomGroupMessageFactory {
    pub fn new(begin_strings: impl IntoIterator<Item = impl Into<String>>, groups: Vec<GroupSpec>) -> Self {
        Self {
            begin_strings: begin_strings.into_iter().map(Into::into).collect(),
            groups,
        }
    }
}

impl MessageFactory for CustomGroupMessageFactory {
    fn supported_begin_strings(&self) -> Vec<String> {
        self.begin_strings.clone()
    }

    fn create(&self, begin_string: &str, msg_type: &str) -> Message {
        new_message(begin_string, None, msg_type)
    }

    fn create_group(
        &self,
        _begin_string: &str,
        msg_type: &str,
        counter_tag: u32,
    ) -> Result<Option<Group>, FactoryError> {
        Ok(find_group(&self.groups, msg_type, counter_tag))
    }
}
