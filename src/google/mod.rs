//! Client for the Google Cloud Translation v2 REST API.
//!
//! The same API key serves both language detection and translation, so a
//! single [`GoogleTranslateClient`] implements the
//! [`crate::language::ports::LanguageDetector`] and
//! [`crate::translation::ports::Translator`] ports. This module holds the
//! shared request plumbing and wire types; the port implementations live in
//! each context's `adapters::google` module.

use crate::config::GoogleConfig;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";

pub(crate) const DETECT_PATH: &str = "/language/translate/v2/detect";
pub(crate) const TRANSLATE_PATH: &str = "/language/translate/v2";

/// HTTP client for the Cloud Translation v2 API.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleTranslateClient {
    /// Creates a client from configuration and a shared HTTP client.
    #[must_use]
    pub fn new(config: &GoogleConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        }
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, GoogleApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(GoogleApiError::transport)?;

        let status = response.status();
        let payload = response.text().await.map_err(GoogleApiError::transport)?;
        if !status.is_success() {
            return Err(GoogleApiError::Status {
                status: status.as_u16(),
                message: error_message(&payload),
            });
        }

        serde_json::from_str(&payload).map_err(|err| GoogleApiError::Decode(err.to_string()))
    }
}

/// Failures shared by both Google endpoints, mapped into port errors by the
/// adapters.
#[derive(Debug, Error)]
pub(crate) enum GoogleApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("undecodable payload: {0}")]
    Decode(String),
}

impl GoogleApiError {
    /// Drops the request URL so errors never echo endpoint details into logs.
    fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

fn error_message(payload: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(payload).map_or_else(
        |_| payload.trim().to_owned(),
        |envelope| envelope.error.message,
    )
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DetectRequest<'a> {
    pub(crate) q: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectResponse {
    pub(crate) data: DetectData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectData {
    pub(crate) detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Detection {
    pub(crate) language: String,
    #[serde(default)]
    pub(crate) confidence: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TranslateRequest<'a> {
    pub(crate) q: &'a str,
    pub(crate) target: &'a str,
    pub(crate) format: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    pub(crate) data: TranslateData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateData {
    pub(crate) translations: Vec<TranslatedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslatedItem {
    pub(crate) translated_text: String,
}
