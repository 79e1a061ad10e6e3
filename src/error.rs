//! Error types for the Sagitta library.
//!
//! All errors are represented by the [`SagittaError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use sagitta::error::{Result, SagittaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SagittaError::field("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sagitta operations.
///
/// This enum represents all possible errors that can occur while transcoding
/// a result page. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum SagittaError {
    /// I/O errors (output stream failures, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Field-related errors (malformed numeric field values, etc.)
    #[error("Field error: {0}")]
    Field(String),

    /// Response assembly errors
    #[error("Response error: {0}")]
    Response(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SagittaError.
pub type Result<T> = std::result::Result<T, SagittaError>;

impl SagittaError {
    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        SagittaError::Field(msg.into())
    }

    /// Create a new response error.
    pub fn response<S: Into<String>>(msg: S) -> Self {
        SagittaError::Response(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SagittaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SagittaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SagittaError::field("bad size value");
        assert_eq!(error.to_string(), "Field error: bad size value");

        let error = SagittaError::response("truncated page");
        assert_eq!(error.to_string(), "Response error: truncated page");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "consumer disconnected");
        let error = SagittaError::from(io_error);

        match error {
            SagittaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
