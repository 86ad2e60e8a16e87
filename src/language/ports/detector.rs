//! Detection provider port.

use crate::language::domain::DetectedLanguage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for language detection.
pub type DetectionResult<T> = Result<T, DetectionError>;

/// External service that classifies the language of a piece of text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Detects the language of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError`] when the provider cannot be reached,
    /// rejects the request, or answers with an unusable payload.
    async fn detect(&self, text: &str) -> DetectionResult<DetectedLanguage>;
}

/// Errors returned by detection provider adapters.
#[derive(Debug, Clone, Error)]
pub enum DetectionError {
    /// The request never produced an HTTP response.
    #[error("detection transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status.
    #[error("detection provider rejected the request ({status}): {message}")]
    Provider {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider-supplied error message.
        message: String,
    },

    /// The provider answered successfully but the payload was unusable.
    #[error("malformed detection response: {0}")]
    MalformedResponse(String),

    /// The adapter itself could not serve the request.
    #[error("language detector unavailable: {0}")]
    Unavailable(String),
}

impl DetectionError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
