//! Message model
//!
//! Minimal FIX message and repeating-group containers. Field values are kept
//! as strings; typed conversion belongs to the codec layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard tags used by the factory layer
pub mod tags {
    pub const BEGIN_STRING: u32 = 8;
    pub const MSG_TYPE: u32 = 35;
    pub const SENDER_COMP_ID: u32 = 49;
    pub const TARGET_COMP_ID: u32 = 56;
    pub const APPL_VER_ID: u32 = 1128;
}

/// Administrative (session-level) message types:
/// Heartbeat, Logon, TestRequest, ResendRequest, Reject, SequenceReset, Logout.
const ADMIN_MSG_TYPES: [&str; 7] = ["0", "A", "1", "2", "3", "4", "5"];

/// Returns true if `msg_type` names a session-level administrative message.
pub fn is_admin_msg_type(msg_type: &str) -> bool {
    ADMIN_MSG_TYPES.contains(&msg_type)
}

/// Tag-ordered field container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: BTreeMap<u32, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn set_field(&mut self, tag: u32, value: impl Into<String>) {
        self.fields.insert(tag, value.into());
    }

    pub fn get_field(&self, tag: u32) -> Option<&str> {
        self.fields.get(&tag).map(String::as_str)
    }

    pub fn is_set(&self, tag: u32) -> bool {
        self.fields.contains_key(&tag)
    }

    pub fn remove_field(&mut self, tag: u32) -> Option<String> {
        self.fields.remove(&tag)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in ascending tag order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.fields.iter().map(|(tag, value)| (*tag, value.as_str()))
    }
}

/// FIX message: header, body and trailer sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub header: FieldMap,
    pub body: FieldMap,
    pub trailer: FieldMap,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a message whose only field is the header MsgType
    pub fn with_msg_type(msg_type: impl Into<String>) -> Self {
        let mut message = Self::new();
        message.header.set_field(tags::MSG_TYPE, msg_type);
        message
    }

    pub fn msg_type(&self) -> Option<&str> {
        self.header.get_field(tags::MSG_TYPE)
    }

    pub fn begin_string(&self) -> Option<&str> {
        self.header.get_field(tags::BEGIN_STRING)
    }

    /// Total number of fields across all sections
    pub fn field_count(&self) -> usize {
        self.header.len() + self.body.len() + self.trailer.len()
    }
}

/// Repeating group instance
///
/// `counter_tag` is the NoXXX tag announcing the number of entries,
/// `delimiter` is the first field of every entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    counter_tag: u32,
    delimiter: u32,
    field_order: Vec<u32>,
    pub fields: FieldMap,
}

impl Group {
    /// Create a group; `field_order` must start with `delimiter`
    pub fn new(counter_tag: u32, delimiter: u32, field_order: Vec<u32>) -> Self {
        Self {
            counter_tag,
            delimiter,
            field_order,
            fields: FieldMap::new(),
        }
    }

    pub fn counter_tag(&self) -> u32 {
        self.counter_tag
    }

    pub fn delimiter(&self) -> u32 {
        self.delimiter
    }

    pub fn field_order(&self) -> &[u32] {
        &self.field_order
    }

    pub fn set_field(&mut self, tag: u32, value: impl Into<String>) {
        self.fields.set_field(tag, value);
    }

    pub fn get_field(&self, tag: u32) -> Option<&str> {
        self.fields.get_field(tag)
    }
}
