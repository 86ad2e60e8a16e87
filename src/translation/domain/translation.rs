//! Translation result and the user-facing fallback.

use crate::language::domain::LanguageTag;
use serde::{Deserialize, Serialize};

/// Reply sent in place of a translation whenever the pipeline fails.
pub const FALLBACK_MESSAGE: &str = "❌ Translation failed. Please try again.";

/// A completed translation.
///
/// The target is always the complement of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    source: LanguageTag,
    text: String,
}

impl Translation {
    /// Records provider output for text resolved as `source`.
    #[must_use]
    pub fn new(source: LanguageTag, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    /// Returns the resolved language of the input.
    #[must_use]
    pub const fn source(&self) -> LanguageTag {
        self.source
    }

    /// Returns the language the text was translated into.
    #[must_use]
    pub const fn target(&self) -> LanguageTag {
        self.source.complement()
    }

    /// Returns the translated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the translation, returning the translated text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
