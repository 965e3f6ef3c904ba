//! Built-in dialect factories

use contracts::begin_string::{
    FIX40, FIX41, FIX42, FIX43, FIX44, FIX50, FIX50SP1, FIX50SP2, FIXT11,
};
use contracts::{is_admin_msg_type, tags, Message};

use crate::groups::{FIX40_GROUPS, FIX42_GROUPS, FIX43_GROUPS, FIX50_GROUPS, FIXT11_GROUPS};

/// Header-initialised message of `msg_type`
///
/// `appl_ver_id` is only stamped on application messages.
pub(crate) fn new_message(
    header_begin_string: &str,
    appl_ver_id: Option<&str>,
    msg_type: &str,
) -> Message {
    let mut message = Message::with_msg_type(msg_type);
    message
        .header
        .set_field(tags::BEGIN_STRING, header_begin_string);
    if let Some(appl_ver_id) = appl_ver_id {
        if !is_admin_msg_type(msg_type) {
            message.header.set_field(tags::APPL_VER_ID, appl_ver_id);
        }
    }
    message
}

define_dialect_factory!(
    /// FIX 4.0
    Fix40MessageFactory,
    [FIX40],
    FIX40,
    None,
    FIX40_GROUPS
);

define_dialect_factory!(
    /// FIX 4.1
    Fix41MessageFactory,
    [FIX41],
    FIX41,
    None,
    FIX40_GROUPS
);

define_dialect_factory!(
    /// FIX 4.2
    Fix42MessageFactory,
    [FIX42],
    FIX42,
    None,
    FIX42_GROUPS
);

define_dialect_factory!(
    /// FIX 4.3
    Fix43MessageFactory,
    [FIX43],
    FIX43,
    None,
    FIX43_GROUPS
);

define_dialect_factory!(
    /// FIX 4.4
    Fix44MessageFactory,
    [FIX44],
    FIX44,
    None,
    FIX43_GROUPS
);

define_dialect_factory!(
    /// FIX 5.0 application messages, carried over FIXT.1.1
    Fix50MessageFactory,
    [FIX50],
    FIXT11,
    Some("7"),
    FIX50_GROUPS
);

define_dialect_factory!(
    /// FIX 5.0 SP1 application messages, carried over FIXT.1.1
    Fix50Sp1MessageFactory,
    [FIX50SP1],
    FIXT11,
    Some("8"),
    FIX50_GROUPS
);

define_dialect_factory!(
    /// FIX 5.0 SP2 application messages, carried over FIXT.1.1
    Fix50Sp2MessageFactory,
    [FIX50SP2],
    FIXT11,
    Some("9"),
    FIX50_GROUPS
);

define_dialect_factory!(
    /// FIXT 1.1 session-layer messages
    Fixt11MessageFactory,
    [FIXT11],
    FIXT11,
    None,
    FIXT11_GROUPS
);
