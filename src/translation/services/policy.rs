//! Translation-direction policy.
//!
//! Provides [`TranslationPolicy`], which flips the resolved language and
//! collapses every failure into [`FALLBACK_MESSAGE`].

use crate::language::{
    ports::{DetectionError, LanguageDetector},
    services::LanguageResolver,
};
use crate::translation::{
    domain::{FALLBACK_MESSAGE, Translation},
    ports::{TranslationProviderError, Translator},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Failures the policy hides behind the fallback message.
#[derive(Debug, Clone, Error)]
pub enum TranslationError {
    /// Language detection failed.
    #[error(transparent)]
    Detection(#[from] DetectionError),
    /// The translation provider failed.
    #[error(transparent)]
    Provider(#[from] TranslationProviderError),
}

/// Translates English to Indonesian and Indonesian to English.
#[derive(Clone)]
pub struct TranslationPolicy<D, T>
where
    D: LanguageDetector,
    T: Translator,
{
    resolver: LanguageResolver<D>,
    translator: Arc<T>,
}

impl<D, T> TranslationPolicy<D, T>
where
    D: LanguageDetector,
    T: Translator,
{
    /// Creates a policy from a resolver and a translation provider.
    #[must_use]
    pub const fn new(resolver: LanguageResolver<D>, translator: Arc<T>) -> Self {
        Self {
            resolver,
            translator,
        }
    }

    /// Translates `text` into the other language of the pair.
    ///
    /// Never fails: any detection or provider error is logged and replaced
    /// by [`FALLBACK_MESSAGE`].
    pub async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Ok(translation) => translation.into_text(),
            Err(err) => {
                error!(error = %err, "translation failed, replying with fallback");
                FALLBACK_MESSAGE.to_owned()
            }
        }
    }

    /// Translates `text`, surfacing the failure instead of the fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Detection`] when the language cannot be
    /// resolved and [`TranslationError::Provider`] when the provider fails.
    pub async fn try_translate(&self, text: &str) -> Result<Translation, TranslationError> {
        let resolution = self.resolver.resolution(text).await?;
        let source = resolution.language();
        let target = source.complement();
        info!(
            detected = resolution.detected().code(),
            resolved = %source,
            overridden = resolution.overridden(),
            target = %target,
            "language resolved"
        );

        let translated = self.translator.translate(text, target).await?;
        Ok(Translation::new(source, translated))
    }
}
