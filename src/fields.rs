//! Member names of the emitted JSON object and context-key list parsing.
//!
//! Downstream consumers match on these names (sometimes by substring rather
//! than by parsing), so they are part of the output contract.

/// Logger name.
pub const LOGGER: &str = "logger";
/// Level, verbatim.
pub const LEVEL: &str = "level";
/// Human-readable rendering of the timestamp.
pub const DATE: &str = "date";
/// Raw epoch milliseconds.
pub const TIMESTAMP: &str = "timestamp";
/// Thread name.
pub const THREAD_NAME: &str = "threadName";
/// Message text.
pub const MESSAGE: &str = "message";
/// Selected diagnostic context entries.
pub const MDC: &str = "MDC";
/// Flattened exception trace.
pub const THROWABLE: &str = "throwable";
/// Nested diagnostic context.
pub const NDC: &str = "NDC";

/// All member names in emission order.
pub const EMISSION_ORDER: &[&str] = &[
    LOGGER,
    LEVEL,
    DATE,
    TIMESTAMP,
    THREAD_NAME,
    MESSAGE,
    MDC,
    THROWABLE,
    NDC,
];

/// Rendering of a null message.
pub const NULL_MESSAGE: &str = "null";

/// Split a comma-separated key list.
///
/// Returns `None` for blank input (empty or whitespace only) so callers can
/// keep their previous list. Segments are kept exactly as written, including
/// surrounding whitespace and empty segments in the middle; only trailing
/// empty segments are dropped.
pub fn parse_key_list(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    let mut keys: Vec<String> = raw.split(',').map(str::to_string).collect();
    while keys.last().is_some_and(String::is_empty) {
        keys.pop();
    }
    Some(keys)
}
