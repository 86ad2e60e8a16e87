//! Closed vocabulary of Indonesian function words.

/// Pronouns, conjunctions and prepositions that mark a phrase as Indonesian.
pub const INDONESIAN_MARKERS: &[&str] = &[
    "nama", "saya", "anda", "dia", "ini", "itu", "yang", "dan", "atau", "dengan", "untuk", "dari",
    "ke", "di", "pada", "adalah", "akan", "tidak",
];

/// Returns whether `word` is an Indonesian marker.
///
/// The comparison is exact; callers lowercase before asking.
#[must_use]
pub fn is_marker(word: &str) -> bool {
    INDONESIAN_MARKERS.contains(&word)
}

/// Counts whitespace-separated tokens of `text` that are markers.
///
/// Tokens are lowercased but otherwise untouched, so `saya,` is not a match.
#[must_use]
pub fn count_markers(text: &str) -> usize {
    let lowered = text.to_lowercase();
    lowered.split_whitespace().filter(|token| is_marker(token)).count()
}

/// Returns whether any whitespace-separated token of `text` is a marker.
#[must_use]
pub fn contains_marker(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.split_whitespace().any(is_marker)
}
