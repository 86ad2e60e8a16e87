//! Port contracts for language resolution.
//!
//! Ports define the infrastructure-agnostic interface the resolver needs
//! from a detection provider.

pub mod detector;

pub use detector::{DetectionError, DetectionResult, LanguageDetector};
