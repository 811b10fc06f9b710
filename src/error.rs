//! Error types for `jsonlayout`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Failure to turn a [`LogEvent`](crate::LogEvent) into a JSON line.
///
/// Carries the underlying [`serde_json::Error`] as its [`source`](std::error::Error::source).
/// When this is returned no output was produced for the event.
#[derive(Debug, Error)]
#[error("failed to encode log event: {source}")]
pub struct EncodingError {
    #[from]
    source: serde_json::Error,
}

/// Errors that can occur in the `jsonlayout` application.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Configuration error (unreadable config file, bad value).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LayoutError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            Self::Io(_) => 2,
        }
    }
}
