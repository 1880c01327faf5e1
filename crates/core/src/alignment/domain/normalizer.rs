use crate::shared::constants::STRIPPED_PUNCTUATION;

/// Normalized form of a token used for comparison: lowercased, with the
/// fixed punctuation set removed. "Cat," and "cat" normalize identically;
/// "word's" is unaffected. Total over all strings.
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}
