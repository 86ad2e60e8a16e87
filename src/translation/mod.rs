//! English/Indonesian translation policy.
//!
//! The policy resolves a message's language through
//! [`crate::language::services::LanguageResolver`], translates into the
//! other language of the pair, and replaces any failure with a fixed
//! fallback reply. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The policy in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
