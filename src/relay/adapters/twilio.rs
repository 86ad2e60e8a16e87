//! Twilio Programmable Messaging delivery adapter.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::TwilioConfig;
use crate::relay::{
    domain::OutboundMessage,
    ports::{DeliveryError, DeliveryReceipt, DeliveryResult, MessageDelivery},
};

/// Sends replies through the Twilio Messages API.
#[derive(Debug, Clone)]
pub struct TwilioDelivery {
    http: reqwest::Client,
    messages_url: String,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl TwilioDelivery {
    /// Creates an adapter from configuration and a shared HTTP client.
    #[must_use]
    pub fn new(config: &TwilioConfig, http: reqwest::Client) -> Self {
        let messages_url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            config.base_url.trim_end_matches('/'),
            config.account_sid
        );
        Self {
            http,
            messages_url,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from_number.clone(),
        }
    }
}

#[async_trait]
impl MessageDelivery for TwilioDelivery {
    async fn deliver(&self, message: &OutboundMessage) -> DeliveryResult<DeliveryReceipt> {
        let form = [
            ("To", message.recipient().as_str()),
            ("From", self.from.as_str()),
            ("Body", message.body()),
        ];
        let response = self
            .http
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(DeliveryError::transport)?;

        let status = response.status();
        let payload = response.text().await.map_err(DeliveryError::transport)?;
        if !status.is_success() {
            let message = serde_json::from_str::<TwilioError>(&payload)
                .map_or_else(|_| payload.trim().to_owned(), |err| err.message);
            return Err(DeliveryError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        // Accepted by the provider; an unreadable body only loses the SID.
        let reference = serde_json::from_str::<CreatedMessage>(&payload).map_or_else(
            |err| {
                warn!(error = %err, "accepted message has no readable receipt");
                String::new()
            },
            |created| created.sid,
        );
        Ok(DeliveryReceipt::new(reference))
    }
}

#[derive(Debug, Deserialize)]
struct CreatedMessage {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioError {
    message: String,
}
