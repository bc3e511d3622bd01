//! Request loop
//!
//! Reads one line at a time, answers it, flushes, and reads the next. Bad
//! lines get an error response and the loop carries on; only I/O failures
//! end the session early.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use thiserror::Error;

use crate::protocol::READY_SIGNAL;
use crate::{ConversionLog, Request, Response};

/// Fatal session errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("error reading input: {0}")]
    Read(#[source] io::Error),

    #[error("error writing response: {0}")]
    Write(#[source] io::Error),
}

/// Counters reported when the input stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Every line read, blank or not
    pub lines_read: u64,
    /// Non-blank lines, each of which got exactly one response
    pub requests: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Blank lines
    pub skipped: u64,
}

impl SessionSummary {
    fn record(&mut self, response: &Response) {
        self.requests += 1;
        if response.is_error() {
            self.failed += 1;
        } else {
            self.succeeded += 1;
        }
    }
}

pub struct Server<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Server<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Server { reader, writer }
    }

    /// Announce readiness, then serve until end of input
    pub fn run(mut self) -> Result<SessionSummary, ServerError> {
        self.write_line(READY_SIGNAL)?;
        tracing::info!("ready, waiting for requests");

        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    tracing::info!("end of input");
                    break;
                }
                Ok(_) => {
                    summary.lines_read += 1;
                    // bad bytes become U+FFFD; the line still gets an answer
                    let line = String::from_utf8_lossy(&buf);
                    match handle_line(&line) {
                        Some(response) => {
                            summary.record(&response);
                            self.write_line(&response)?;
                            tracing::trace!(request_id = response.request_id(), error = response.is_error(), "responded");
                        }
                        None => summary.skipped += 1,
                    }
                }
                Err(e) => return Err(ServerError::Read(e)),
            }
        }

        Ok(summary)
    }

    fn write_line(&mut self, line: impl std::fmt::Display) -> Result<(), ServerError> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(ServerError::Write)
    }
}

/// Answer a single input line. Blank lines get no response.
pub fn handle_line(line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(request_id = e.request_id(), error = %e, "rejected request line");
            return Some(e.into());
        }
    };

    let started = Instant::now();
    let outcome = request.convert();

    if tracing::enabled!(target: "unitline::conversion", tracing::Level::DEBUG) {
        ConversionLog::new(&request, &outcome, started.elapsed()).emit();
    }

    Some(match outcome {
        Ok(value) => Response::success(request.request_id, value),
        Err(e) => e.into(),
    })
}
