//! Application services for language resolution.

mod resolver;

pub use resolver::LanguageResolver;
