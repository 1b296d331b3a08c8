//! Error handling module for the boglt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the boglt CLI application.
#[derive(Error, Debug)]
pub enum BogltError {
    /// The configuration file is missing, malformed or names an unknown
    /// colour.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading an input file failed.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Input validation failed, including sources that did not pass `check`.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using BogltError.
pub type Result<T> = std::result::Result<T, BogltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = BogltError::Config("unknown colour \"mauve\"".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown colour \"mauve\"");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = BogltError::FileOperation("game.bgl: permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: game.bgl: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = BogltError::Validation("2 problem(s) found".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 problem(s) found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BogltError = io_err.into();
        assert!(matches!(err, BogltError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BogltError = json_err.into();
        assert!(matches!(err, BogltError::Json(_)));
    }
}
