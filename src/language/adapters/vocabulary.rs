//! Offline detector based on a small Indonesian vocabulary.

use async_trait::async_trait;

use crate::language::{
    domain::{DetectedLanguage, LanguageTag},
    ports::{DetectionResult, LanguageDetector},
};

/// Function words that make the offline detector report Indonesian.
///
/// Broader than the override markers: includes `mereka` and `kita`, and
/// omits `nama`.
pub const DETECTION_VOCABULARY: &[&str] = &[
    "dan", "atau", "yang", "ini", "itu", "dengan", "untuk", "dari", "ke", "di", "pada", "adalah",
    "akan", "tidak", "saya", "anda", "dia", "mereka", "kita",
];

/// Detector that needs no network access.
///
/// Reports Indonesian when any whitespace token, lowercased, is in
/// [`DETECTION_VOCABULARY`] and English otherwise. It never fails, which
/// makes it a stand-in when no detection credentials are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularyDetector;

impl VocabularyDetector {
    /// Creates the detector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LanguageDetector for VocabularyDetector {
    async fn detect(&self, text: &str) -> DetectionResult<DetectedLanguage> {
        let lowered = text.to_lowercase();
        let language = if lowered
            .split_whitespace()
            .any(|word| DETECTION_VOCABULARY.contains(&word))
        {
            LanguageTag::Id
        } else {
            LanguageTag::En
        };
        Ok(DetectedLanguage::new(language.as_str()))
    }
}
