//! Relaying chat messages between the provider webhook and translation.
//!
//! Each inbound message is either a `help` command, answered with fixed
//! text, or something to translate. The reply is handed to a delivery
//! collaborator and its outcome is only logged. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
