//! Error types for img64

use thiserror::Error;

/// Errors that can occur while encoding or decoding an image
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Malformed or missing arguments, caught before any I/O is attempted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure during a remote fetch
    #[error("Network error: {0}")]
    Network(String),

    /// The remote fetch succeeded but the response carried no body
    #[error("Empty response from {0}")]
    EmptyResponse(String),

    /// The remote fetch returned a status other than 200 OK
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Local filesystem read or write failure
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}
