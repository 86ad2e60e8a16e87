//! Jembatan: a WhatsApp relay that translates between English and
//! Indonesian.
//!
//! Each inbound chat message is answered with exactly one reply: the help
//! text for a `help` command, otherwise the message translated into the
//! other member of the language pair, or a fixed fallback when a provider
//! fails.
//!
//! # Architecture
//!
//! Jembatan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (provider APIs, memory)
//!
//! # Modules
//!
//! - [`language`]: Detection and resolution into the English/Indonesian pair
//! - [`translation`]: Translation policy with fallback
//! - [`relay`]: Inbound message handling and reply delivery
//! - [`server`]: Webhook and health routes
//! - [`google`]: Shared Cloud Translation client
//! - [`config`]: Environment configuration
//! - [`telemetry`]: Logging set-up

pub mod config;
pub mod google;
pub mod language;
pub mod relay;
pub mod server;
pub mod telemetry;
pub mod translation;
