//! Port contracts for translation.

pub mod translator;

pub use translator::{TranslationProviderError, Translator, TranslatorResult};
