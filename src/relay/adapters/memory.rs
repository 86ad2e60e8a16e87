//! In-memory delivery adapter for tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::relay::{
    domain::OutboundMessage,
    ports::{DeliveryError, DeliveryReceipt, DeliveryResult, MessageDelivery},
};

/// Delivery adapter that records outbound messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelivery {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    delivered: Vec<OutboundMessage>,
    attempts: usize,
    failing: bool,
}

impl RecordingDelivery {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent delivery fail, or succeed again.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Unavailable`] when lock acquisition fails.
    pub fn set_failing(&self, failing: bool) -> DeliveryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DeliveryError::Unavailable(err.to_string()))?;
        state.failing = failing;
        Ok(())
    }

    /// Returns successfully delivered messages, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Unavailable`] when lock acquisition fails.
    pub fn delivered(&self) -> DeliveryResult<Vec<OutboundMessage>> {
        let state = self
            .state
            .read()
            .map_err(|err| DeliveryError::Unavailable(err.to_string()))?;
        Ok(state.delivered.clone())
    }

    /// Returns the number of delivery attempts, failed ones included.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Unavailable`] when lock acquisition fails.
    pub fn attempts(&self) -> DeliveryResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| DeliveryError::Unavailable(err.to_string()))?;
        Ok(state.attempts)
    }
}

#[async_trait]
impl MessageDelivery for RecordingDelivery {
    async fn deliver(&self, message: &OutboundMessage) -> DeliveryResult<DeliveryReceipt> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DeliveryError::Unavailable(err.to_string()))?;
        state.attempts += 1;
        if state.failing {
            return Err(DeliveryError::Provider {
                status: 503,
                message: "recording delivery is failing".to_owned(),
            });
        }
        state.delivered.push(message.clone());
        Ok(DeliveryReceipt::new(format!("memory-{}", state.attempts)))
    }
}
