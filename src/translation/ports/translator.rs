//! Translation provider port.

use crate::language::domain::LanguageTag;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for translation provider calls.
pub type TranslatorResult<T> = Result<T, TranslationProviderError>;

/// External service that converts text into a target language.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`, returning the translated text.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationProviderError`] when the provider cannot be
    /// reached, rejects the request, or answers with an unusable payload.
    async fn translate(&self, text: &str, target: LanguageTag) -> TranslatorResult<String>;
}

/// Errors returned by translation provider adapters.
#[derive(Debug, Clone, Error)]
pub enum TranslationProviderError {
    /// The request never produced an HTTP response.
    #[error("translation transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status.
    #[error("translation provider rejected the request ({status}): {message}")]
    Provider {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider-supplied error message.
        message: String,
    },

    /// The provider answered successfully but the payload was unusable.
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    /// The adapter itself could not serve the request.
    #[error("translator unavailable: {0}")]
    Unavailable(String),
}

impl TranslationProviderError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
