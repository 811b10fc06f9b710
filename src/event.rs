//! The log event model.
//!
//! A [`LogEvent`] is an immutable snapshot of one logging call: the fixed
//! attributes plus whatever diagnostic context the caller captured at the
//! time. Nothing here reads thread-local or global state; the caller is
//! responsible for taking the snapshot before handing the event over.

use std::collections::HashMap;
use std::error::Error;

use serde::{Deserialize, Deserializer};

/// Prefix for each cause line produced by [`LogEvent::with_error`].
pub const CAUSED_BY: &str = "Caused by: ";

/// A single structured log event.
///
/// Deserializes from a camelCase JSON object; every member except
/// `loggerName`, `level`, `timestampMillis` and `threadName` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub logger_name: String,
    pub level: String,
    /// Unix epoch milliseconds.
    pub timestamp_millis: i64,
    pub thread_name: String,
    /// String form of the message; `None` for a null message.
    #[serde(default)]
    pub message: Option<String>,
    /// Diagnostic context snapshot. Null values are dropped on deserialization.
    #[serde(default, deserialize_with = "deserialize_context_map")]
    pub context_map: HashMap<String, String>,
    /// Nested diagnostic context, frames flattened into one string.
    #[serde(default)]
    pub nested_context: Option<String>,
    /// Rendered exception, one entry per line. Empty means no exception.
    #[serde(default)]
    pub throwable_trace: Vec<String>,
}

impl LogEvent {
    /// Create an event with no context, nested context or exception.
    pub fn new(
        logger_name: impl Into<String>,
        level: impl Into<String>,
        timestamp_millis: i64,
        thread_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            logger_name: logger_name.into(),
            level: level.into(),
            timestamp_millis,
            thread_name: thread_name.into(),
            message: Some(message.into()),
            context_map: HashMap::new(),
            nested_context: None,
            throwable_trace: Vec::new(),
        }
    }

    /// Mark the message as null.
    #[must_use]
    pub fn with_null_message(mut self) -> Self {
        self.message = None;
        self
    }

    /// Add one diagnostic context entry, replacing any previous value.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context_map.insert(key.into(), value.into());
        self
    }

    /// Flatten a stack of nested-context frames, oldest first, into the
    /// single space-separated string. An empty stack leaves it unset.
    #[must_use]
    pub fn with_nested_context<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flattened = String::new();
        for frame in frames {
            if !flattened.is_empty() {
                flattened.push(' ');
            }
            flattened.push_str(frame.as_ref());
        }
        self.nested_context = if flattened.is_empty() {
            None
        } else {
            Some(flattened)
        };
        self
    }

    /// Set the rendered exception lines.
    #[must_use]
    pub fn with_throwable<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.throwable_trace = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Render `err` and its `source()` chain as exception lines.
    #[must_use]
    pub fn with_error(mut self, err: &(dyn Error + 'static)) -> Self {
        self.throwable_trace = error_trace(err);
        self
    }
}

/// Render an error chain: the error itself, then one `Caused by:` line per source.
pub fn error_trace(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    let mut cause = err.source();
    while let Some(inner) = cause {
        lines.push(format!("{CAUSED_BY}{inner}"));
        cause = inner.source();
    }
    lines
}

fn deserialize_context_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect())
}
