//! Domain model for the translation-direction policy.

mod translation;

pub use translation::{FALLBACK_MESSAGE, Translation};
