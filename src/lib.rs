//! `jsonlayout` — encode structured log events as single-line JSON.
//!
//! Each [`LogEvent`] becomes exactly one compact JSON object followed by a
//! newline, with members in a fixed order: `logger`, `level`, `date`,
//! `timestamp`, `threadName`, `message`, then the optional `MDC`,
//! `throwable` and `NDC` sections. The output is meant to be appended as-is
//! to a line-oriented log file consumed by an indexing pipeline.
//!
//! # Example
//!
//! ```
//! use jsonlayout::{EventEncoder, LogEvent};
//! use jiff::tz::TimeZone;
//!
//! let encoder = EventEncoder::with_time_zone(TimeZone::UTC);
//! encoder.set_context_keys("UserId");
//!
//! let event = LogEvent::new("org.example", "INFO", 0, "main", "Hello World")
//!     .with_context("UserId", "U1");
//! let line = encoder.encode(&event).unwrap();
//!
//! assert!(line.starts_with(r#"{"logger":"org.example","level":"INFO","date":"1970-01-01 12:00:00""#));
//! assert!(line.ends_with("\"MDC\":{\"UserId\":\"U1\"}}\n"));
//! ```

pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod event;
pub mod fields;
pub mod logging;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use encoder::{EncoderConfig, EventEncoder, encode};
pub use error::{EncodingError, LayoutError};
pub use event::LogEvent;
pub use timestamp::EventTime;
