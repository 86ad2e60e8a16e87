//! Adapter implementations of the detection port.
//!
//! - [`configured`]: start-up selection between the production detectors
//! - [`google`]: Cloud Translation v2 detection for production
//! - [`vocabulary`]: offline marker-count detector
//! - [`memory`]: scripted detector for tests

pub mod configured;
pub mod google;
pub mod memory;
pub mod vocabulary;

pub use configured::ConfiguredDetector;
pub use memory::ScriptedLanguageDetector;
pub use vocabulary::VocabularyDetector;
