//! Outcome of resolving a message's language.

use super::{DetectedLanguage, LanguageTag};

/// How the resolver arrived at a language for one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    detected: DetectedLanguage,
    language: LanguageTag,
    overridden: bool,
}

impl Resolution {
    /// Records a resolution.
    #[must_use]
    pub const fn new(detected: DetectedLanguage, language: LanguageTag, overridden: bool) -> Self {
        Self {
            detected,
            language,
            overridden,
        }
    }

    /// Returns the raw detector output.
    #[must_use]
    pub const fn detected(&self) -> &DetectedLanguage {
        &self.detected
    }

    /// Returns the resolved language.
    #[must_use]
    pub const fn language(&self) -> LanguageTag {
        self.language
    }

    /// Whether the Indonesian marker check replaced the detector's answer.
    #[must_use]
    pub const fn overridden(&self) -> bool {
        self.overridden
    }
}
