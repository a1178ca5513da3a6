//! Error types for the Camera3D library
//!
//! The builders are pure functions, so every error here is a caller contract
//! violation: the same input always fails the same way.

use std::fmt;

/// Result type for Camera3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input outside the mathematical domain of a matrix builder
    /// (near == far, eye == target, up parallel to the view direction, ...)
    DomainError(String),

    /// A camera configuration field is out of range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DomainError(msg) => write!(f, "Domain error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error before handing it back to the caller.
///
/// Invalid input must never pass silently, so every error constructed by the
/// library goes through here.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    match &error {
        Error::DomainError(msg) => {
            crate::camera_error!(source, "Domain error: {}", msg);
        }
        Error::InvalidConfig(msg) => {
            crate::camera_error!(source, "Invalid config: {}", msg);
        }
    }
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
