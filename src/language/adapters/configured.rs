//! Runtime selection between the production detectors.

use async_trait::async_trait;

use crate::google::GoogleTranslateClient;
use crate::language::{
    domain::DetectedLanguage,
    ports::{DetectionResult, LanguageDetector},
};

use super::VocabularyDetector;

/// Detector chosen at start-up from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredDetector {
    /// Cloud Translation detection.
    Google(GoogleTranslateClient),
    /// Offline marker vocabulary.
    Vocabulary(VocabularyDetector),
}

#[async_trait]
impl LanguageDetector for ConfiguredDetector {
    async fn detect(&self, text: &str) -> DetectionResult<DetectedLanguage> {
        match self {
            Self::Google(client) => client.detect(text).await,
            Self::Vocabulary(detector) => detector.detect(text).await,
        }
    }
}
