//! Unitline conversion service
//!
//! Speaks the line protocol on stdin/stdout. Diagnostics go to stderr,
//! filtered by `RUST_LOG` (default `info`).

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use unitline_server::Server;
use unitline_units::UNITS;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries responses only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_logging();

    tracing::info!(version = SERVER_VERSION, "unitline starting");
    tracing::debug!(units = UNITS.len(), "unit registry loaded");
    tracing::debug!(stdin_is_terminal = io::stdin().is_terminal(), "stdin");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match Server::new(stdin, stdout).run() {
        Ok(summary) => {
            tracing::info!(
                lines_read = summary.lines_read,
                requests = summary.requests,
                succeeded = summary.succeeded,
                failed = summary.failed,
                skipped = summary.skipped,
                "shutting down"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "fatal I/O error, shutting down");
            ExitCode::FAILURE
        }
    }
}
