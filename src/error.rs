//! Custom error types for npm-wrapped with improved type safety and error handling.

use thiserror::Error;

/// Main error type for npm-wrapped operations.
#[derive(Error, Debug)]
pub enum WrappedError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Registry errors
    #[error("Package not found: \"{0}\"")]
    PackageNotFound(String),

    #[error("Failed to fetch \"{package}\" (HTTP {status})")]
    FetchFailed { package: String, status: u16 },
}

impl WrappedError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a package not found error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        Self::PackageNotFound(package.into())
    }

    /// Create a fetch failed error
    pub fn fetch_failed(package: impl Into<String>, status: u16) -> Self {
        Self::FetchFailed {
            package: package.into(),
            status,
        }
    }
}
