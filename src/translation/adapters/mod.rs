//! Adapter implementations of the translator port.
//!
//! - [`google`]: Cloud Translation v2 for production
//! - [`memory`]: scripted translator for tests

pub mod google;
pub mod memory;

pub use memory::ScriptedTranslator;
