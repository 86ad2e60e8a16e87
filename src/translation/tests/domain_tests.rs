//! Unit tests for translation domain types.

use crate::language::domain::LanguageTag;
use crate::translation::domain::{FALLBACK_MESSAGE, Translation};
use rstest::rstest;

#[rstest]
#[case(LanguageTag::En, LanguageTag::Id)]
#[case(LanguageTag::Id, LanguageTag::En)]
fn translation_target_is_the_complement_of_its_source(
    #[case] source: LanguageTag,
    #[case] target: LanguageTag,
) {
    let translation = Translation::new(source, "text");
    assert_eq!(translation.target(), target);
    assert_ne!(translation.target(), translation.source());
}

#[rstest]
fn translation_yields_its_text() {
    let translation = Translation::new(LanguageTag::Id, "Good morning");
    assert_eq!(translation.text(), "Good morning");
    assert_eq!(translation.into_text(), "Good morning");
}

#[rstest]
fn fallback_message_is_the_fixed_literal() {
    assert_eq!(FALLBACK_MESSAGE, "❌ Translation failed. Please try again.");
}
