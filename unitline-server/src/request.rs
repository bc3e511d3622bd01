//! Request line parsing

use thiserror::Error;
use unitline_units::{ConversionError, ErrorKind};

use crate::protocol::{REQUEST_FIELDS, UNKNOWN_REQUEST_ID};

/// A parsed `<requestId> <value> <fromUnit> <toUnit>` line
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub request_id: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// Per-line failure. `Display` is the message sent after `ERROR`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid input format")]
    MalformedRequest { request_id: String },

    #[error("Invalid number format")]
    InvalidNumber { request_id: String },

    #[error("{source}")]
    Conversion {
        request_id: String,
        #[source]
        source: ConversionError,
    },
}

impl RequestError {
    /// Id to echo back in the error response
    pub fn request_id(&self) -> &str {
        match self {
            RequestError::MalformedRequest { request_id }
            | RequestError::InvalidNumber { request_id }
            | RequestError::Conversion { request_id, .. } => request_id,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::MalformedRequest { .. } => ErrorKind::MalformedRequest,
            RequestError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            RequestError::Conversion { source, .. } => source.kind(),
        }
    }
}

impl Request {
    /// Parse a non-blank line.
    ///
    /// Fields are separated by runs of whitespace and there must be exactly
    /// four of them; ids and unit names cannot contain spaces.
    pub fn parse(line: &str) -> Result<Request, RequestError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != REQUEST_FIELDS {
            let request_id = tokens.first().copied().unwrap_or(UNKNOWN_REQUEST_ID);
            return Err(RequestError::MalformedRequest {
                request_id: request_id.to_string(),
            });
        }

        let request_id = tokens[0].to_string();
        let value = match tokens[1].parse::<f64>() {
            Ok(v) => v,
            Err(_) => return Err(RequestError::InvalidNumber { request_id }),
        };

        Ok(Request {
            request_id,
            value,
            from_unit: tokens[2].to_string(),
            to_unit: tokens[3].to_string(),
        })
    }

    /// Run the conversion this request asks for
    pub fn convert(&self) -> Result<f64, RequestError> {
        unitline_units::convert(self.value, &self.from_unit, &self.to_unit)
            .map_err(|source| RequestError::Conversion {
                request_id: self.request_id.clone(),
                source,
            })
    }
}
