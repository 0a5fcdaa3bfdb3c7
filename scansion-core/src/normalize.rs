//! Word normalization and line tokenization

/// Lowercase a token and trim surrounding ASCII punctuation
///
/// Interior punctuation survives, so contractions such as `don't` keep
/// their apostrophe.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Split a line into whitespace-delimited tokens, preserving order
pub fn tokenize_line(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}
