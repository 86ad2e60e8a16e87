//! Google Cloud Translation adapter.

use async_trait::async_trait;

use crate::google::{
    GoogleApiError, GoogleTranslateClient, TRANSLATE_PATH, TranslateRequest, TranslateResponse,
};
use crate::language::domain::LanguageTag;
use crate::translation::ports::{TranslationProviderError, Translator, TranslatorResult};

/// Plain-text format, so the provider does not HTML-escape quotes.
const TEXT_FORMAT: &str = "text";

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target: LanguageTag) -> TranslatorResult<String> {
        let request = TranslateRequest {
            q: text,
            target: target.as_str(),
            format: TEXT_FORMAT,
        };
        let response: TranslateResponse = self
            .post(TRANSLATE_PATH, &request)
            .await
            .map_err(translation_error)?;

        response
            .data
            .translations
            .into_iter()
            .next()
            .map(|item| item.translated_text)
            .ok_or_else(|| {
                TranslationProviderError::MalformedResponse("no translations returned".to_owned())
            })
    }
}

fn translation_error(err: GoogleApiError) -> TranslationProviderError {
    match err {
        GoogleApiError::Transport(source) => TranslationProviderError::transport(source),
        GoogleApiError::Status { status, message } => {
            TranslationProviderError::Provider { status, message }
        }
        GoogleApiError::Decode(reason) => TranslationProviderError::MalformedResponse(reason),
    }
}
