//! Exit code definitions for the sx CLI
//!
//! The not-found and unknown-error codes are part of the scripting
//! contract; changing them is a breaking change.

use sx_core::Error;

/// Exit codes for the sx CLI application.
///
/// Scripts key off these values to tell a missing object apart from a
/// transport failure, so the mapping is centralized here and applied
/// exactly once, at the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// Invalid arguments; emitted by the argument parser before any
    /// network activity
    UsageError = 2,

    /// The remote object (or the local upload source) does not exist
    NotFound = 404,

    /// Any other failure: network, auth, malformed request
    UnknownError = 500,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a core error to its exit code
    pub const fn from_error(error: &Error) -> Self {
        match error.exit_code() {
            404 => Self::NotFound,
            _ => Self::UnknownError,
        }
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::UsageError => "Invalid arguments",
            Self::NotFound => "Object or source file not found",
            Self::UnknownError => "Unknown error",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::UsageError.as_i32(), 2);
        assert_eq!(ExitCode::NotFound.as_i32(), 404);
        assert_eq!(ExitCode::UnknownError.as_i32(), 500);
    }

    #[test]
    fn test_exit_code_from_error() {
        assert_eq!(
            ExitCode::from_error(&Error::NotFound("x".into())),
            ExitCode::NotFound
        );
        assert_eq!(
            ExitCode::from_error(&Error::Transfer("x".into())),
            ExitCode::UnknownError
        );
        assert_eq!(
            ExitCode::from_error(&Error::Config("x".into())),
            ExitCode::UnknownError
        );
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Success.into();
        assert_eq!(code, 0);

        let code: i32 = ExitCode::NotFound.into();
        assert_eq!(code, 404);
    }

    #[test]
    fn test_exit_code_display() {
        let display = format!("{}", ExitCode::NotFound);
        assert!(display.contains("404"));
        assert!(display.contains("not found"));
    }
}
