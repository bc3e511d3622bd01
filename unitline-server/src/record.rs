//! Per-request diagnostic record
//!
//! Emitted as a `debug` event on the diagnostic stream, never on stdout.

use std::time::Duration;

use serde::Serialize;
use unitline_units::ErrorKind;

use crate::{Request, RequestError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionLog {
    pub request_id: String,
    pub input_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    pub time_taken_us: u64,
}

impl ConversionLog {
    pub fn new(request: &Request, outcome: &Result<f64, RequestError>, elapsed: Duration) -> Self {
        ConversionLog {
            request_id: request.request_id.clone(),
            input_value: request.value,
            from_unit: request.from_unit.clone(),
            to_unit: request.to_unit.clone(),
            converted_value: outcome.as_ref().ok().copied(),
            error: outcome.as_ref().err().map(RequestError::kind),
            time_taken_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }

    /// JSON form for the log line
    pub fn to_json(&self) -> String {
        // serde_json renders non-finite floats as null instead of failing
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"serialize_error\":\"{}\"}}", e))
    }

    pub fn emit(&self) {
        tracing::debug!(target: "unitline::conversion", record = %self.to_json(), "conversion");
    }
}
