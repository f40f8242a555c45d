//! Error definitions
//!
//! This module provides error types for kindcheck.

use thiserror::Error;

/// Main error type for kindcheck
#[derive(Error, Debug)]
pub enum Error {
    /// A matcher rejected the checked value
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

impl Error {
    /// Create an assertion failure carrying the selected matcher message.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
