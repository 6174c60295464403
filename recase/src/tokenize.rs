//! Tokenization: the delimiter policies that decide where words begin.

use regex::Regex;

lazy_static! {
    static ref SPACED_DELIMITERS: Regex = Regex::new(r"[\s-]+").unwrap();
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9]+").unwrap();
}

/// Split on runs of whitespace or hyphens, dropping empty tokens.
///
/// Underscores and other punctuation are not delimiters here, so they
/// stay inside their token.
pub(crate) fn split_spaced(input: &str) -> impl Iterator<Item = &str> {
    SPACED_DELIMITERS.split(input).filter(|word| !word.is_empty())
}

/// Split on runs of anything that is not an ASCII letter or digit,
/// dropping empty tokens. Digits count as word-forming characters.
pub(crate) fn split_words(input: &str) -> impl Iterator<Item = &str> {
    NON_ALNUM.split(input).filter(|word| !word.is_empty())
}

/// Rewrite word boundaries as hyphens without splitting the string.
///
/// Two passes, in this order: runs of whitespace or underscores collapse
/// to a single hyphen, then a hyphen is inserted at each lowercase-to-
/// uppercase adjacency. The second pass must see the original casing, so
/// the passes cannot be fused or reordered.
pub(crate) fn hyphenate_boundaries(input: &str) -> String {
    lazy_static! {
        static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_]+").unwrap();
        static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    }
    let hyphenated = SEPARATOR_RUN.replace_all(input, "-");
    CASE_BOUNDARY.replace_all(&hyphenated, "${1}-${2}").into_owned()
}
