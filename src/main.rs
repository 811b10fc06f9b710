use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use jsonlayout::cli::Cli;
use jsonlayout::config::Config;
use jsonlayout::{EventEncoder, LayoutError, LogEvent, logging};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when jsonlayout exits early.
    reset_sigpipe();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jsonlayout: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let encoder = EventEncoder::from_config(&config.encoder);
    tracing::debug!(context_keys = ?encoder.context_keys(), "encoder ready");

    match run(&encoder) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LayoutError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jsonlayout: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Encode every event on stdin to stdout, one line each.
///
/// Undecodable lines and events that fail to encode are logged and dropped.
fn run(encoder: &EventEncoder) -> Result<(), LayoutError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for (index, line_result) in stdin.lock().lines().enumerate() {
        let line_no = index + 1;
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(line = line_no, "skipping line that is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }

        let event: LogEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping undecodable event");
                continue;
            }
        };

        match encoder.encode(&event) {
            Ok(encoded) => writer.write_all(encoded.as_bytes())?,
            Err(e) => tracing::warn!(line = line_no, error = %e, "dropping event"),
        }
    }

    writer.flush()?;
    Ok(())
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a filter like `jsonlayout`, this causes the *upstream* writer to
/// receive a `BrokenPipeError` when `jsonlayout` exits. Restoring `SIG_DFL`
/// lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
