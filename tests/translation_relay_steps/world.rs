//! Shared world state for translation relay BDD scenarios.

use std::sync::Arc;

use jembatan::language::{adapters::ScriptedLanguageDetector, services::LanguageResolver};
use jembatan::relay::{
    adapters::RecordingDelivery,
    domain::SenderId,
    services::RelayService,
};
use jembatan::translation::{adapters::ScriptedTranslator, services::TranslationPolicy};
use mockable::DefaultClock;
use rstest::fixture;

/// Relay type used by the BDD world.
pub type TestRelay =
    RelayService<ScriptedLanguageDetector, ScriptedTranslator, RecordingDelivery, DefaultClock>;

/// Scenario world for translation relay behaviour tests.
pub struct RelayWorld {
    /// Detector the relay consults.
    pub detector: ScriptedLanguageDetector,
    /// Translator the relay consults.
    pub translator: ScriptedTranslator,
    /// Recorder standing in for the messaging provider.
    pub delivery: RecordingDelivery,
    /// Relay under test, built by the first Given step.
    pub relay: Option<TestRelay>,
    /// Sender used by When steps.
    pub sender: Option<SenderId>,
}

impl RelayWorld {
    /// Creates a world with fresh in-memory providers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: ScriptedLanguageDetector::new("en"),
            translator: ScriptedTranslator::new(),
            delivery: RecordingDelivery::new(),
            relay: None,
            sender: None,
        }
    }

    /// Builds the relay over the world's providers.
    pub fn build_relay(&mut self) {
        let policy = TranslationPolicy::new(
            LanguageResolver::new(Arc::new(self.detector.clone())),
            Arc::new(self.translator.clone()),
        );
        self.relay = Some(RelayService::new(
            policy,
            Arc::new(self.delivery.clone()),
            Arc::new(DefaultClock),
        ));
    }
}

impl Default for RelayWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RelayWorld {
    RelayWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
