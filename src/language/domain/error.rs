//! Error types for language domain parsing.

use thiserror::Error;

/// Error returned when a code is outside the English/Indonesian pair.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported language code: {0}")]
pub struct ParseLanguageTagError(pub String);
