//! Unitline Server
//!
//! Line protocol over any `BufRead`/`Write` pair:
//!
//! ```text
//! -> READY
//! <- 7 100 celsius fahrenheit
//! -> 7 212.0000000000
//! <- 9 abc meter mile
//! -> 9 ERROR Invalid number format
//! ```

pub mod protocol;
mod record;
mod request;
mod response;
mod server;

pub use record::ConversionLog;
pub use request::{Request, RequestError};
pub use response::Response;
pub use server::{handle_line, Server, ServerError, SessionSummary};
