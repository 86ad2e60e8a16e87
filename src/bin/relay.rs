//! Runs the translation relay.
//!
//! Configuration is read from the environment; see [`RelayConfig`] for the
//! recognised variables. The server stops cleanly on Ctrl-C.

use jembatan::config::{DetectorChoice, RelayConfig};
use jembatan::google::GoogleTranslateClient;
use jembatan::language::{
    adapters::{ConfiguredDetector, VocabularyDetector},
    services::LanguageResolver,
};
use jembatan::relay::{adapters::TwilioDelivery, services::RelayService};
use jembatan::server;
use jembatan::telemetry::init_tracing;
use jembatan::translation::services::TranslationPolicy;
use mockable::DefaultClock;
use std::sync::Arc;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing()?;
    let config = RelayConfig::from_env()?;
    info!(
        detector = ?config.detector,
        project_id = config.google.project_id.as_deref().unwrap_or("-"),
        from = %config.twilio.from_number,
        "configuration loaded"
    );

    let http = reqwest::Client::builder()
        .timeout(config.provider_timeout)
        .build()?;
    let google = GoogleTranslateClient::new(&config.google, http.clone());
    let detector = match config.detector {
        DetectorChoice::Google => ConfiguredDetector::Google(google.clone()),
        DetectorChoice::Vocabulary => ConfiguredDetector::Vocabulary(VocabularyDetector::new()),
    };

    let policy = TranslationPolicy::new(LanguageResolver::new(Arc::new(detector)), Arc::new(google));
    let delivery = TwilioDelivery::new(&config.twilio, http);
    let relay = RelayService::new(policy, Arc::new(delivery), Arc::new(DefaultClock));

    server::serve(config.server.socket_addr(), server::router(Arc::new(relay))).await?;
    Ok(())
}
