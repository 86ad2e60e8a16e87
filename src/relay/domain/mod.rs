//! Domain model for relaying chat messages.
//!
//! Inbound messages come from the provider webhook; each produces exactly
//! one outbound reply addressed back to its sender.

mod command;
mod error;
mod ids;
mod message;
mod sender;

pub use command::{BotCommand, HELP_MESSAGE};
pub use error::RelayDomainError;
pub use ids::MessageId;
pub use message::{InboundMessage, OutboundMessage, ReplyKind};
pub use sender::SenderId;
