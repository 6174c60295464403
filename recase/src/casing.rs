//! Recasing: turn a token sequence back into a string under a naming
//! convention. Case mapping is ASCII-only, so digits and punctuation
//! pass through unchanged.

use crate::tokenize::{hyphenate_boundaries, split_spaced, split_words};

/// Convert to camelCase, treating any run of non-alphanumeric characters
/// as a word boundary.
///
/// The first word is fully lowercased; every later word is lowercased
/// and then title-cased, so mixed-case acronyms are flattened
/// (`"user ID"` becomes `"userId"`).
pub fn camel_case(name: &str) -> String {
    let mut words = split_words(name.trim());
    let mut out = String::with_capacity(name.len());
    if let Some(first) = words.next() {
        out.push_str(&first.to_ascii_lowercase());
    }
    for word in words {
        push_title_cased(&mut out, word);
    }
    out
}

/// Convert to camelCase, splitting only on whitespace and hyphens.
///
/// Underscores and punctuation are not word boundaries here, so
/// `"user_id"` stays `"user_id"` while `"mobile-number"` becomes
/// `"mobileNumber"`.
pub fn simple_camel_case(name: &str) -> String {
    let mut words = split_spaced(name);
    let mut out = String::with_capacity(name.len());
    if let Some(first) = words.next() {
        out.push_str(&first.to_ascii_lowercase());
    }
    for word in words {
        push_title_cased(&mut out, word);
    }
    out
}

/// Convert to kebab-case by boundary substitution rather than splitting.
///
/// Runs of whitespace and underscores become single hyphens, camelCase
/// boundaries get a hyphen inserted, and the whole result is lowercased.
/// Nothing is trimmed or discarded, so characters outside the delimiters
/// survive verbatim.
pub fn kebab_case(name: &str) -> String {
    hyphenate_boundaries(name).to_ascii_lowercase()
}

/// Convert to dot.case: every word lowercased, joined with `.`, with any
/// run of non-alphanumeric characters treated as a word boundary.
pub fn dot_case(name: &str) -> String {
    split_words(name.trim())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

/// Append `word` lowercased with its first character uppercased.
fn push_title_cased(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!("firstName", &camel_case("first name"));
        assert_eq!("userId", &camel_case("user_id"));
        assert_eq!("mobileNumber", &camel_case("mobile-number"));
        assert_eq!("userId", &camel_case("user ID"));
        assert_eq!("exampleTest", &camel_case("Example   Test!"));
        assert_eq!("a", &camel_case("A"));
        assert_eq!("", &camel_case(""));
        assert_eq!("", &camel_case("   "));
        assert_eq!("", &camel_case("?!."));
    }

    #[test]
    fn test_simple_camel_case() {
        assert_eq!("firstName", &simple_camel_case("first name"));
        assert_eq!("mobileNumber", &simple_camel_case("mobile-number"));
        // underscore is not a delimiter under this policy
        assert_eq!("user_id", &simple_camel_case("user_id"));
        assert_eq!("exampleTest!", &simple_camel_case("Example   Test!"));
        assert_eq!("a", &simple_camel_case("  A "));
        assert_eq!("", &simple_camel_case(" - "));
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!("user-id", &kebab_case("User ID"));
        assert_eq!("user-id", &kebab_case("user_id"));
        assert_eq!("user-id", &kebab_case("userID"));
        assert_eq!("foo-bar-baz", &kebab_case("fooBar_baz"));
        // digits do not form a case boundary
        assert_eq!("user2id", &kebab_case("user2Id"));
        // substitution model: no trimming
        assert_eq!("-a-", &kebab_case(" a "));
        assert_eq!("a", &kebab_case("A"));
        assert_eq!("", &kebab_case(""));
    }

    #[test]
    fn test_dot_case() {
        assert_eq!("hello.world", &dot_case("Hello World"));
        assert_eq!("example.test", &dot_case("Example   Test!"));
        assert_eq!("user.id", &dot_case("user_id"));
        assert_eq!("v2.api", &dot_case("v2.api"));
        assert_eq!("a", &dot_case("A"));
        assert_eq!("", &dot_case("   "));
    }
}
