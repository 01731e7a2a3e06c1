//! Accent- and case-insensitive ordering of answer choices.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sort key: NFKD decomposition with combining marks removed, lowercased.
#[must_use]
pub fn sort_key(text: &str) -> String {
    text.nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return `options` ordered by [`sort_key`]. Equal keys keep their input order.
pub fn sort_options<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = options
        .iter()
        .map(|option| option.as_ref().to_string())
        .collect();
    sorted.sort_by_cached_key(|option| sort_key(option));
    sorted
}
