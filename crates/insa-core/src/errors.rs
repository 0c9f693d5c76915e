//! Error types for console and configuration failures
//!
//! Input that fails validation is never an error at this level; it is
//! recovered inside the reader loop. What remains is the console itself
//! breaking and a configuration that cannot describe a valid prompt.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsaError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for InsaError {
    fn from(err: std::io::Error) -> Self {
        InsaError::Io(err.to_string())
    }
}
