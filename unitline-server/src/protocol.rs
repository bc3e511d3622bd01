//! Wire constants

/// Line emitted once before any input is read
pub const READY_SIGNAL: &str = "READY";

/// Digits after the decimal point in a success response
pub const RESULT_PRECISION: usize = 10;

/// Request id used when a line carries no tokens at all
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Second field of an error response
pub const ERROR_MARKER: &str = "ERROR";

/// Fields on a well-formed request line
pub const REQUEST_FIELDS: usize = 4;
