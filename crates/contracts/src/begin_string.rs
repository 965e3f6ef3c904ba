//! Well-known FIX begin strings
//!
//! Begin strings are opaque tokens compared by exact string equality.
//! These constants only name the dialects shipped with the workspace.

pub const FIX40: &str = "FIX.4.0";
pub const FIX41: &str = "FIX.4.1";
pub const FIX42: &str = "FIX.4.2";
pub const FIX43: &str = "FIX.4.3";
pub const FIX44: &str = "FIX.4.4";

/// Session-layer transport version; the application dialect is negotiated
/// separately (ApplVerID).
pub const FIXT11: &str = "FIXT.1.1";

pub const FIX50: &str = "FIX.5.0";
pub const FIX50SP1: &str = "FIX.5.0SP1";
pub const FIX50SP2: &str = "FIX.5.0SP2";
