//! # Contracts
//!
//! Frozen interface contracts shared by the fixcore crates: the message
//! model, the provider / session-log / sender traits, settings and errors.
//! All business crates can only depend on this crate, reverse dependencies
//! are prohibited.
//!
//! ## Versions
//! - A begin string is an opaque token; equality is exact string match
//! - `FIXT.1.1` carries the application dialect in a separate layer

pub mod begin_string;
mod error;
mod factory;
mod message;
mod sender;
mod session_id;
mod session_log;
pub mod settings;

pub use error::*;
pub use factory::MessageFactory;
pub use message::{is_admin_msg_type, tags, FieldMap, Group, Message};
pub use sender::MessageSender;
pub use session_id::SessionId;
pub use session_log::{LogFactory, SessionLog};
pub use settings::{Dictionary, SessionSettings};
