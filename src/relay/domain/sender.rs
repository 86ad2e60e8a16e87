//! Validated sender address.

use super::RelayDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider address of a chat participant, such as
/// `whatsapp:+6281234567890`.
///
/// Replies are addressed back to the same value, so it is kept verbatim
/// apart from trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderId(String);

impl SenderId {
    /// Creates a validated sender address.
    ///
    /// # Errors
    ///
    /// Returns [`RelayDomainError::EmptySenderId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RelayDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RelayDomainError::EmptySenderId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SenderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
