//! # Session
//!
//! Session logs and message sending.
//!
//! Provides:
//! - Per-session log creation (file, tracing, null)
//! - `CompositeSessionLog`, which forwards each call to several logs in order
//! - `DefaultMessageSender`, which hands messages to session routing

pub mod composite;
pub mod factory;
pub mod logs;
pub mod sender;

pub use composite::CompositeSessionLog;
pub use contracts::{LogError, LogFactory, SessionLog};
pub use factory::{CompositeLogFactory, FileLogFactory, NullLogFactory, TracingLogFactory};
pub use logs::{file_prefix, FileSessionLog, NullSessionLog, TracingSessionLog};
pub use sender::{DefaultMessageSender, SessionRouter};
