//! Language resolution service.
//!
//! Provides [`LanguageResolver`], which corrects a detector's answer toward
//! Indonesian when the text contains common Indonesian function words.

use crate::language::{
    domain::{DetectedLanguage, LanguageTag, Resolution, markers},
    ports::{DetectionResult, LanguageDetector},
};
use std::sync::Arc;
use tracing::debug;

/// Decides whether text is English or Indonesian.
#[derive(Clone)]
pub struct LanguageResolver<D>
where
    D: LanguageDetector,
{
    detector: Arc<D>,
}

impl<D> LanguageResolver<D>
where
    D: LanguageDetector,
{
    /// Creates a resolver backed by `detector`.
    #[must_use]
    pub const fn new(detector: Arc<D>) -> Self {
        Self { detector }
    }

    /// Resolves the language of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::language::ports::DetectionError`] when the detection
    /// provider fails.
    pub async fn resolve(&self, text: &str) -> DetectionResult<LanguageTag> {
        Ok(self.resolution(text).await?.language())
    }

    /// Resolves the language of `text`, keeping the raw detector output.
    ///
    /// When the detector reports English or Malay and any whitespace token
    /// of the lowercased text is an Indonesian marker, the answer becomes
    /// Indonesian. Otherwise the raw code is coerced into the pair, with
    /// unrecognised codes treated as English.
    ///
    /// # Errors
    ///
    /// Returns [`crate::language::ports::DetectionError`] when the detection
    /// provider fails.
    pub async fn resolution(&self, text: &str) -> DetectionResult<Resolution> {
        let detected = self.detector.detect(text).await?;
        Ok(resolve_detected(text, detected))
    }
}

fn resolve_detected(text: &str, detected: DetectedLanguage) -> Resolution {
    if detected.is_override_candidate() && markers::contains_marker(text) {
        debug!(detected = detected.code(), "indonesian markers override detector");
        return Resolution::new(detected, LanguageTag::Id, true);
    }

    let language = LanguageTag::recognise(detected.code()).unwrap_or_else(|| {
        debug!(detected = detected.code(), "coercing unrecognised language code to en");
        LanguageTag::En
    });
    Resolution::new(detected, language, false)
}
