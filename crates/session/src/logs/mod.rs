//! Session log implementations

mod file;
mod null;
mod trace;

pub use self::file::{file_prefix, FileSessionLog};
pub use self::null::NullSessionLog;
pub use self::trace::TracingSessionLog;
