//! The closed English/Indonesian language pair.

use super::ParseLanguageTagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two languages the relay translates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTag {
    /// English (`en`).
    En,
    /// Indonesian (`id`).
    Id,
}

impl LanguageTag {
    /// Returns the ISO 639-1 code sent to providers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    /// Returns the other member of the pair.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::En => Self::Id,
            Self::Id => Self::En,
        }
    }

    /// Recognises a raw provider code.
    ///
    /// Matching is case-insensitive and considers only the primary subtag,
    /// so `id-ID` and `EN_us` are recognised. The legacy Indonesian code
    /// `in` maps to [`LanguageTag::Id`]. Returns `None` for anything else.
    #[must_use]
    pub fn recognise(code: &str) -> Option<Self> {
        let primary = primary_subtag(code);
        if primary.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else if primary.eq_ignore_ascii_case("id") || primary.eq_ignore_ascii_case("in") {
            Some(Self::Id)
        } else {
            None
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LanguageTag {
    type Error = ParseLanguageTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::recognise(value).ok_or_else(|| ParseLanguageTagError(value.to_owned()))
    }
}

/// Returns the primary subtag of a BCP 47 style code, trimmed.
pub(crate) fn primary_subtag(code: &str) -> &str {
    code.trim().split(['-', '_']).next().unwrap_or_default()
}
