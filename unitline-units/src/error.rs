//! Conversion errors
//!
//! `Display` renders the exact message sent back to the caller.

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of request failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong number of fields on a request line
    MalformedRequest,
    /// Value field is not a floating-point literal
    InvalidNumber,
    /// A unit name is not in the registry
    UnsupportedUnit,
    /// Both units are known but belong to different categories
    CategoryMismatch,
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    #[error("Cannot convert between different unit categories: {from} to {to}")]
    CategoryMismatch { from: String, to: String },

    #[error("Unsupported length unit conversion: {from} to {to}")]
    UnsupportedLengthConversion { from: String, to: String },

    #[error("Unsupported mass unit conversion: {from} to {to}")]
    UnsupportedMassConversion { from: String, to: String },

    #[error("Unsupported temperature unit: {0}")]
    UnsupportedTemperatureUnit(String),
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::CategoryMismatch { .. } => ErrorKind::CategoryMismatch,
            ConversionError::UnsupportedUnit(_)
            | ConversionError::UnsupportedLengthConversion { .. }
            | ConversionError::UnsupportedMassConversion { .. }
            | ConversionError::UnsupportedTemperatureUnit(_) => ErrorKind::UnsupportedUnit,
        }
    }
}
