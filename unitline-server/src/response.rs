//! Response lines

use std::fmt;

use crate::protocol::{ERROR_MARKER, RESULT_PRECISION};
use crate::RequestError;

/// One line of output, written once and then dropped
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// `<requestId> <result>`
    Success { request_id: String, value: f64 },
    /// `<requestId> ERROR <message>`
    Error { request_id: String, message: String },
}

impl Response {
    pub fn success(request_id: impl Into<String>, value: f64) -> Self {
        Response::Success {
            request_id: request_id.into(),
            value,
        }
    }

    pub fn error(request_id: impl Into<String>, message: impl Into<String>) -> Self {
        Response::Error {
            request_id: request_id.into(),
            message: message.into(),
        }
    }

    pub fn request_id(&self) -> &str {
        match self {
            Response::Success { request_id, .. } | Response::Error { request_id, .. } => request_id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<RequestError> for Response {
    fn from(err: RequestError) -> Self {
        Response::error(err.request_id(), err.to_string())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Success { request_id, value } => {
                write!(f, "{} {:.*}", request_id, RESULT_PRECISION, value)
            }
            Response::Error { request_id, message } => {
                write!(f, "{} {} {}", request_id, ERROR_MARKER, message)
            }
        }
    }
}
