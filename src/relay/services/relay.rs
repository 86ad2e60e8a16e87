//! Relay orchestration service.
//!
//! Provides [`RelayService`], which answers each inbound message with
//! exactly one outbound reply and hands that reply to delivery without
//! waiting for the outcome.

use crate::language::ports::LanguageDetector;
use crate::relay::{
    domain::{BotCommand, InboundMessage, OutboundMessage, ReplyKind, SenderId},
    ports::MessageDelivery,
};
use crate::translation::{
    domain::FALLBACK_MESSAGE,
    ports::Translator,
    services::TranslationPolicy,
};
use mockable::Clock;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, error, info, info_span};

/// Handles inbound chat messages end to end.
pub struct RelayService<D, T, M, C>
where
    D: LanguageDetector,
    T: Translator,
    M: MessageDelivery,
    C: Clock + Send + Sync,
{
    policy: TranslationPolicy<D, T>,
    delivery: Arc<M>,
    clock: Arc<C>,
}

impl<D, T, M, C> RelayService<D, T, M, C>
where
    D: LanguageDetector,
    T: Translator,
    M: MessageDelivery + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a relay from a translation policy, a delivery collaborator,
    /// and a clock.
    #[must_use]
    pub const fn new(policy: TranslationPolicy<D, T>, delivery: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            policy,
            delivery,
            clock,
        }
    }

    /// Wraps raw webhook fields in an inbound message stamped with the
    /// current time.
    #[must_use]
    pub fn accept(&self, sender: SenderId, text: impl Into<String>) -> InboundMessage {
        InboundMessage::new(sender, text, &*self.clock)
    }

    /// Builds the reply for `message`.
    ///
    /// A `help` command is answered with the fixed help text and never
    /// reaches the translator. Everything else is translated, with failures
    /// replaced by the fallback text.
    pub async fn reply_to(&self, message: &InboundMessage) -> OutboundMessage {
        let recipient = message.sender().clone();
        if let Some(command) = BotCommand::parse(message.text()) {
            debug!(?command, "command intercepted");
            return OutboundMessage::new(recipient, command.reply(), ReplyKind::Help);
        }

        match self.policy.try_translate(message.text()).await {
            Ok(translation) => {
                OutboundMessage::new(recipient, translation.into_text(), ReplyKind::Translation)
            }
            Err(err) => {
                error!(error = %err, "translation failed, replying with fallback");
                OutboundMessage::new(recipient, FALLBACK_MESSAGE, ReplyKind::Fallback)
            }
        }
    }

    /// Hands `outbound` to the delivery collaborator on a detached task.
    ///
    /// The outcome is logged and never reported back. The returned handle
    /// may be dropped; awaiting it only waits for the attempt to finish.
    pub fn dispatch(&self, outbound: OutboundMessage) -> JoinHandle<()> {
        let delivery = Arc::clone(&self.delivery);
        let span = info_span!("deliver", recipient = %outbound.recipient());
        tokio::spawn(
            async move {
                match delivery.deliver(&outbound).await {
                    Ok(receipt) => info!(
                        reference = receipt.reference(),
                        kind = outbound.kind().as_str(),
                        "reply sent"
                    ),
                    Err(err) => error!(error = %err, "reply delivery failed"),
                }
            }
            .instrument(span),
        )
    }

    /// Answers `message` and dispatches the reply.
    pub async fn relay(&self, message: &InboundMessage) -> JoinHandle<()> {
        let span = info_span!(
            "relay",
            request_id = %message.id(),
            sender = %message.sender()
        );
        async {
            info!("message received");
            debug!(text = message.text(), "message text");
            let outbound = self.reply_to(message).await;
            let elapsed = self.clock.utc() - message.received_at();
            info!(
                kind = outbound.kind().as_str(),
                elapsed_ms = elapsed.num_milliseconds(),
                "reply prepared"
            );
            self.dispatch(outbound)
        }
        .instrument(span)
        .await
    }
}
