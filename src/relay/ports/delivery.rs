//! Outbound delivery port.

use crate::relay::domain::OutboundMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Provider acknowledgement of an accepted outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    reference: String,
}

impl DeliveryReceipt {
    /// Creates a receipt carrying the provider's message reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Returns the provider's message reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

/// Collaborator that sends replies back through the messaging provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Sends `message` to its recipient.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the provider cannot be reached or
    /// refuses the message.
    async fn deliver(&self, message: &OutboundMessage) -> DeliveryResult<DeliveryReceipt>;
}

/// Errors returned by delivery adapters.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// The request never produced an HTTP response.
    #[error("delivery transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider refused the message.
    #[error("delivery provider rejected the message ({status}): {message}")]
    Provider {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider-supplied error message.
        message: String,
    },

    /// The adapter itself could not serve the request.
    #[error("delivery unavailable: {0}")]
    Unavailable(String),
}

impl DeliveryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
