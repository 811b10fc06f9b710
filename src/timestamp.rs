//! Rendering of event timestamps.
//!
//! Events carry their time as Unix epoch milliseconds. The encoder emits the
//! raw number and a human-readable companion rendered in a time zone with
//! second precision and a 12-hour clock hour (`yyyy-MM-dd hh:mm:ss`).

use jiff::tz::TimeZone;

/// strftime pattern for the `date` member: 12-hour zero-padded hour, no
/// meridiem, no zone, no fractional seconds.
pub const DATE_FORMAT: &str = "%Y-%m-%d %I:%M:%S";

/// An event timestamp.
///
/// Wraps a [`jiff::Timestamp`] together with the epoch milliseconds it was
/// built from, so the numeric form round-trips exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTime {
    /// Normalized timestamp value.
    pub value: jiff::Timestamp,
    /// Original epoch milliseconds.
    pub millis: i64,
}

impl EventTime {
    /// Build from Unix epoch milliseconds.
    ///
    /// Fails when the value lies outside the range jiff can represent
    /// (roughly years -9999 to 9999).
    pub fn from_millis(millis: i64) -> Result<Self, jiff::Error> {
        let value = jiff::Timestamp::from_millisecond(millis)?;
        Ok(Self { value, millis })
    }

    /// Format using the given strftime-compatible format string in `tz`.
    pub fn format_with(&self, format: &str, tz: &TimeZone) -> String {
        let zdt = self.value.to_zoned(tz.clone());
        zdt.strftime(format).to_string()
    }

    /// Format as the `date` member value ([`DATE_FORMAT`]) in `tz`.
    pub fn format_date(&self, tz: &TimeZone) -> String {
        self.format_with(DATE_FORMAT, tz)
    }
}
