//! Command-line argument definitions for `jsonlayout`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::Parser;

/// Encode log events as single-line JSON.
///
/// Reads one JSON-serialized log event per line from stdin and writes one
/// encoded JSON line per event to stdout. Lines that cannot be decoded are
/// reported on stderr and skipped.
#[derive(Debug, Parser)]
#[command(name = "jsonlayout", version, about, long_about = None)]
pub struct Cli {
    /// Diagnostic context keys to emit under `MDC` (comma-separated, in order).
    ///
    /// A blank value keeps the list from the config file.
    #[arg(short = 'k', long)]
    pub context_keys: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Log debug diagnostics to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
