//! Raw detector output.

use super::tag::primary_subtag;
use serde::{Deserialize, Serialize};

/// Language code reported by a detection provider, before coercion.
///
/// The code is kept exactly as the provider returned it; providers may
/// report any language, `und` for undetermined input, or region-qualified
/// codes such as `id-ID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    code: String,
    confidence: Option<f64>,
}

impl DetectedLanguage {
    /// Creates a detection result without a confidence score.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            confidence: None,
        }
    }

    /// Creates a detection result from a provider code and an optional
    /// confidence score.
    #[must_use]
    pub fn reported(code: impl Into<String>, confidence: Option<f64>) -> Self {
        Self {
            code: code.into(),
            confidence,
        }
    }

    /// Attaches the provider's confidence score.
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Returns the raw provider code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the provider's confidence score, when reported.
    #[must_use]
    pub const fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    /// Whether the code is English or Malay, the two tags general-purpose
    /// detectors confuse with short Indonesian phrases.
    #[must_use]
    pub fn is_override_candidate(&self) -> bool {
        let primary = primary_subtag(&self.code);
        primary.eq_ignore_ascii_case("en") || primary.eq_ignore_ascii_case("ms")
    }
}
