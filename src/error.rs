//! Custom error types for finlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finlog operations
#[derive(Error, Debug)]
pub enum FinlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/write errors, including malformed ledger rows
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input errors (e.g. end of input while prompting)
    #[error("Input error: {0}")]
    Input(String),
}

impl FinlogError {
    /// Check if this is an input error
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FinlogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FinlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for finlog operations
pub type FinlogResult<T> = Result<T, FinlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinlogError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_input_error() {
        let err = FinlogError::Input("unexpected end of input".into());
        assert!(err.is_input());
        assert_eq!(err.to_string(), "Input error: unexpected end of input");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let finlog_err: FinlogError = io_err.into();
        assert!(matches!(finlog_err, FinlogError::Io(_)));
    }
}
