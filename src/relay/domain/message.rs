//! Inbound and outbound chat messages.

use super::{MessageId, SenderId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A chat message received from the provider webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    id: MessageId,
    sender: SenderId,
    text: String,
    received_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Creates an inbound message stamped with the clock's current time.
    #[must_use]
    pub fn new(sender: SenderId, text: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            text: text.into(),
            received_at: clock.utc(),
        }
    }

    /// Returns the correlation identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sender address.
    #[must_use]
    pub const fn sender(&self) -> &SenderId {
        &self.sender
    }

    /// Returns the raw message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the webhook received the message.
    #[must_use]
    pub const fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// What an outbound reply carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// The fixed help text.
    Help,
    /// A provider translation.
    Translation,
    /// The fallback text after a failed translation.
    Fallback,
}

impl ReplyKind {
    /// Returns the canonical log representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Translation => "translation",
            Self::Fallback => "fallback",
        }
    }
}

/// A reply handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    recipient: SenderId,
    body: String,
    kind: ReplyKind,
}

impl OutboundMessage {
    /// Creates a reply to `recipient`.
    #[must_use]
    pub fn new(recipient: SenderId, body: impl Into<String>, kind: ReplyKind) -> Self {
        Self {
            recipient,
            body: body.into(),
            kind,
        }
    }

    /// Returns the address the reply goes to.
    #[must_use]
    pub const fn recipient(&self) -> &SenderId {
        &self.recipient
    }

    /// Returns the reply text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns what the reply carries.
    #[must_use]
    pub const fn kind(&self) -> ReplyKind {
        self.kind
    }
}
