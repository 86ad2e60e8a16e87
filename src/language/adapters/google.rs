//! Google Cloud Translation detection adapter.

use async_trait::async_trait;

use crate::google::{DETECT_PATH, DetectRequest, DetectResponse, GoogleApiError, GoogleTranslateClient};
use crate::language::{
    domain::DetectedLanguage,
    ports::{DetectionError, DetectionResult, LanguageDetector},
};

#[async_trait]
impl LanguageDetector for GoogleTranslateClient {
    async fn detect(&self, text: &str) -> DetectionResult<DetectedLanguage> {
        let response: DetectResponse = self
            .post(DETECT_PATH, &DetectRequest { q: text })
            .await
            .map_err(detection_error)?;

        let detection = response
            .data
            .detections
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| DetectionError::MalformedResponse("no detections returned".to_owned()))?;

        Ok(DetectedLanguage::reported(
            detection.language,
            detection.confidence,
        ))
    }
}

fn detection_error(err: GoogleApiError) -> DetectionError {
    match err {
        GoogleApiError::Transport(source) => DetectionError::transport(source),
        GoogleApiError::Status { status, message } => DetectionError::Provider { status, message },
        GoogleApiError::Decode(reason) => DetectionError::MalformedResponse(reason),
    }
}
