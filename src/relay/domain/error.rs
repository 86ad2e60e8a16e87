//! Error types for relay domain validation.

use thiserror::Error;

/// Errors returned while constructing relay domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayDomainError {
    /// The sender address is empty after trimming.
    #[error("sender address must not be empty")]
    EmptySenderId,
}
