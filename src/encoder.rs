//! Event-to-JSON encoder.
//!
//! Turns a [`LogEvent`] into exactly one line of compact JSON:
//!
//! ```text
//! {"logger":..,"level":..,"date":..,"timestamp":..,"threadName":..,"message":..[,"MDC":{..}][,"throwable":..][,"NDC":..]}\n
//! ```
//!
//! Member order is fixed. Some consumers locate members by substring, so
//! changing the order is a breaking change.

use std::sync::{Arc, PoisonError, RwLock};

use jiff::tz::TimeZone;
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};

use crate::error::EncodingError;
use crate::event::LogEvent;
use crate::fields;
use crate::timestamp::EventTime;

/// Encoder configuration: which diagnostic context keys to surface, in order.
///
/// An empty list (the default) omits the `MDC` member entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    context_keys: Vec<String>,
}

impl EncoderConfig {
    /// Build from an explicit key list.
    pub fn with_context_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            context_keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the key list from a comma-separated string.
    ///
    /// Blank input leaves the current list untouched; it does not clear it.
    pub fn set_context_keys(&mut self, raw: &str) {
        match fields::parse_key_list(raw) {
            Some(keys) => self.context_keys = keys,
            None => tracing::debug!("ignoring blank context key list"),
        }
    }

    /// Copy of the configured keys.
    pub fn context_keys(&self) -> Vec<String> {
        self.context_keys.clone()
    }
}

/// Encode one event with the given configuration, rendering `date` in `tz`.
///
/// Returns the JSON object followed by a single `\n`. On error nothing is
/// returned; there is no partially written line.
pub fn encode(
    event: &LogEvent,
    config: &EncoderConfig,
    tz: &TimeZone,
) -> Result<String, EncodingError> {
    encode_with_keys(event, &config.context_keys, tz)
}

fn encode_with_keys(
    event: &LogEvent,
    context_keys: &[String],
    tz: &TimeZone,
) -> Result<String, EncodingError> {
    let view = EncodedEvent {
        event,
        context_keys,
        tz,
    };
    let mut line = serde_json::to_string(&view)?;
    line.push('\n');
    Ok(line)
}

/// Shareable encoder holding a copy-on-write snapshot of its key list.
///
/// [`encode`](Self::encode) takes `&self` and can run on many threads at
/// once. [`set_context_keys`](Self::set_context_keys) swaps in a new list
/// atomically: calls already in flight finish with the list they started
/// with.
#[derive(Debug)]
pub struct EventEncoder {
    context_keys: RwLock<Arc<[String]>>,
    tz: TimeZone,
}

impl Default for EventEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEncoder {
    /// Encoder with no context keys, rendering dates in the system time zone.
    pub fn new() -> Self {
        Self::with_time_zone(TimeZone::system())
    }

    /// Encoder with no context keys, rendering dates in `tz`.
    pub fn with_time_zone(tz: TimeZone) -> Self {
        Self {
            context_keys: RwLock::new(Arc::from(Vec::new())),
            tz,
        }
    }

    /// Encoder seeded from `config`, rendering dates in the system time zone.
    pub fn from_config(config: &EncoderConfig) -> Self {
        let encoder = Self::new();
        encoder.replace_keys(config.context_keys.clone());
        encoder
    }

    /// Replace the key list from a comma-separated string.
    ///
    /// Blank input is a no-op, not a reset.
    pub fn set_context_keys(&self, raw: &str) {
        match fields::parse_key_list(raw) {
            Some(keys) => self.replace_keys(keys),
            None => tracing::debug!("ignoring blank context key list"),
        }
    }

    /// Copy of the current key list.
    pub fn context_keys(&self) -> Vec<String> {
        self.snapshot().to_vec()
    }

    /// Current configuration as a standalone value.
    pub fn config(&self) -> EncoderConfig {
        EncoderConfig {
            context_keys: self.context_keys(),
        }
    }

    /// Encode one event. See [`encode`].
    pub fn encode(&self, event: &LogEvent) -> Result<String, EncodingError> {
        let keys = self.snapshot();
        encode_with_keys(event, &keys, &self.tz)
    }

    fn snapshot(&self) -> Arc<[String]> {
        // The guarded value is always a complete list, so a poisoned lock is safe to reuse.
        let guard = self
            .context_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn replace_keys(&self, keys: Vec<String>) {
        tracing::trace!(?keys, "replacing context keys");
        let fresh: Arc<[String]> = Arc::from(keys);
        let mut guard = self
            .context_keys
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = fresh;
    }
}

/// Borrowed view serialized in the fixed member order.
struct EncodedEvent<'a> {
    event: &'a LogEvent,
    context_keys: &'a [String],
    tz: &'a TimeZone,
}

impl Serialize for EncodedEvent<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let event = self.event;
        let time = EventTime::from_millis(event.timestamp_millis).map_err(S::Error::custom)?;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(fields::LOGGER, &event.logger_name)?;
        map.serialize_entry(fields::LEVEL, &event.level)?;
        map.serialize_entry(fields::DATE, &time.format_date(self.tz))?;
        map.serialize_entry(fields::TIMESTAMP, &time.millis)?;
        map.serialize_entry(fields::THREAD_NAME, &event.thread_name)?;
        map.serialize_entry(
            fields::MESSAGE,
            event.message.as_deref().unwrap_or(fields::NULL_MESSAGE),
        )?;

        if !self.context_keys.is_empty() {
            map.serialize_entry(
                fields::MDC,
                &ContextSection {
                    event,
                    keys: self.context_keys,
                },
            )?;
        }

        if let Some(trace) = render_throwable(&event.throwable_trace) {
            map.serialize_entry(fields::THROWABLE, &trace)?;
        }

        if let Some(ref ndc) = event.nested_context {
            map.serialize_entry(fields::NDC, ndc)?;
        }

        map.end()
    }
}

/// The `MDC` object: configured keys, in order, that have a value.
struct ContextSection<'a> {
    event: &'a LogEvent,
    keys: &'a [String],
}

impl Serialize for ContextSection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for key in self.keys {
            if let Some(value) = self.event.context_map.get(key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Join trace lines, each terminated by `\n`. `None` when there are no lines.
fn render_throwable(lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    let capacity = lines.iter().map(|l| l.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    Some(out)
}
