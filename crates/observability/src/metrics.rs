//! Factory and session-log metrics
//!
//! Thin recording helpers over the `metrics` facade. Without an installed
//! recorder every call is a no-op.

use metrics::{counter, histogram};

/// Label used for begin strings no provider serves
pub const UNKNOWN_BEGIN_STRING: &str = "unknown";

/// Record a message creation
///
/// `provider_key` is the registry key that served the request, `None` when
/// the bare fallback message was returned. Only registered keys become label
/// values, so the series count stays bounded by the registry.
pub fn record_message_created(provider_key: Option<&str>) {
    let (begin_string, outcome) = match provider_key {
        Some(key) => (key, "provider"),
        None => (UNKNOWN_BEGIN_STRING, "fallback"),
    };
    counter!(
        "fixcore_messages_created_total",
        "begin_string" => begin_string.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a group request refused for an unsupported begin string
pub fn record_group_unsupported() {
    counter!("fixcore_groups_unsupported_total").increment(1);
}

/// Record one plugin library load attempt
pub fn record_plugin_load(success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!("fixcore_plugin_loads_total", "status" => status).increment(1);
}

/// Record a fan-out log call and how many sinks it reached
pub fn record_log_fanout(operation: &'static str, sink_count: usize) {
    counter!("fixcore_log_fanout_total", "operation" => operation).increment(1);
    histogram!("fixcore_log_fanout_sinks").record(sink_count as f64);
}

/// Record a rejected call on a disposed log
pub fn record_log_disposed_access(operation: &'static str) {
    counter!("fixcore_log_disposed_access_total", "operation" => operation).increment(1);
}
