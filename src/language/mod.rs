//! Language resolution for inbound messages.
//!
//! General-purpose detectors often misclassify short Indonesian phrases as
//! Malay or English. This module wraps a detection provider with a
//! closed-vocabulary correction and coerces every answer into the
//! English/Indonesian pair. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The resolver in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
