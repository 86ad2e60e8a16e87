//! Request handlers for the relay routes.

use crate::language::ports::LanguageDetector;
use crate::relay::{domain::SenderId, ports::MessageDelivery, services::RelayService};
use crate::translation::ports::Translator;
use axum::{Form, extract::State, http::StatusCode};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Plain-text body returned by the health check.
pub const HEALTH_MESSAGE: &str = "WhatsApp Translator Bot is running! 🤖";

/// Form fields posted by the messaging provider.
///
/// Only the message text and the sender address are read; the provider
/// sends many more fields, which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookForm {
    /// Message text; absent fields are treated as empty.
    #[serde(rename = "Body", default)]
    pub body: String,
    /// Sender address, for example `whatsapp:+628123456789`.
    #[serde(rename = "From")]
    pub from: String,
}

/// Liveness probe.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Accepts one inbound message.
///
/// The reply is computed before responding; delivery continues on a
/// detached task. A blank sender is rejected with `400 Bad Request`.
pub async fn webhook<D, T, M, C>(
    State(relay): State<Arc<RelayService<D, T, M, C>>>,
    Form(form): Form<WebhookForm>,
) -> StatusCode
where
    D: LanguageDetector + 'static,
    T: Translator + 'static,
    M: MessageDelivery + 'static,
    C: Clock + Send + Sync + 'static,
{
    let sender = match SenderId::new(form.from) {
        Ok(sender) => sender,
        Err(err) => {
            warn!(error = %err, "webhook rejected");
            return StatusCode::BAD_REQUEST;
        }
    };

    let message = relay.accept(sender, form.body);
    drop(relay.relay(&message).await);
    StatusCode::OK
}
