//! Application services for translation.

mod policy;

pub use policy::{TranslationError, TranslationPolicy};
