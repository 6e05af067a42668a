//! Error types for sx-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for sx-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sx-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid connection parameters
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote object or local source file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network, permission, or malformed-request failure during a transfer
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Get the appropriate exit code for this error
    ///
    /// A missing object/source gets its own reserved code so scripts can
    /// distinguish it from transport failures.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound(_) => 404,
            _ => 500, // UnknownError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::NotFound("test".into()).exit_code(), 404);
        assert_eq!(Error::Transfer("test".into()).exit_code(), 500);
        assert_eq!(Error::Config("test".into()).exit_code(), 500);
        assert_eq!(Error::Io(std::io::Error::other("boom")).exit_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("logs/app.log".into());
        assert_eq!(err.to_string(), "Not found: logs/app.log");

        let err = Error::Transfer("connection reset".into());
        assert_eq!(err.to_string(), "Transfer failed: connection reset");
    }
}
