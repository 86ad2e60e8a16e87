//! Domain model for language resolution.
//!
//! The relay only ever translates between English and Indonesian, so the
//! resolved language is a closed two-member enum. Raw detector output is
//! kept separately so the coercion into that pair stays explicit.

mod detected;
mod error;
pub mod markers;
mod resolution;
mod tag;

pub use detected::DetectedLanguage;
pub use error::ParseLanguageTagError;
pub use resolution::Resolution;
pub use tag::LanguageTag;
