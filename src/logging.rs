//! Diagnostic logging for the `jsonlayout` binary.
//!
//! Diagnostics go to stderr through [`tracing`]; stdout carries nothing but
//! encoded lines. `RUST_LOG` is honored, defaulting to `warn`.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directive enabling debug output for this crate's targets only.
const VERBOSE_DIRECTIVE: &str = "jsonlayout=debug";

/// Install the global subscriber.
///
/// `verbose` raises the `jsonlayout` targets to `DEBUG`; other crates keep
/// the level from `RUST_LOG`. Does nothing if a subscriber is already
/// installed.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = match verbose_directive(verbose) {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn verbose_directive(verbose: bool) -> Option<Directive> {
    if verbose {
        VERBOSE_DIRECTIVE.parse().ok()
    } else {
        None
    }
}
