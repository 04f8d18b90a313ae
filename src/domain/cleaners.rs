// src/domain/cleaners.rs

use regex::Regex;
use std::sync::LazyLock;

static TYPE_KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)house|terraced|semi-detached|detached|block of flats|duplex|bungalow|mansion")
        .unwrap()
});

static NON_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());

/// Picks the city out of a free-text address: the second-to-last
/// comma-separated segment, trimmed. Addresses with fewer than two
/// segments yield an empty string.
pub fn extract_city(address: &str) -> String {
    let segments: Vec<&str> = address.split(',').collect();
    if segments.len() < 2 {
        return String::new();
    }
    segments[segments.len() - 2].trim().to_string()
}

/// Collects every dwelling-type keyword found in a listing title, in order
/// of appearance, joined by spaces and title-cased.
///
/// Matching is case-insensitive and does not respect word boundaries, so
/// "Townhouse" contributes "House". Repeated keywords are kept.
pub fn extract_type_keywords(title: &str) -> String {
    let found: Vec<&str> = TYPE_KEYWORDS_RE
        .find_iter(title)
        .map(|m| m.as_str())
        .collect();

    title_case(&found.join(" "))
}

/// Drops everything that is not a digit.
pub fn strip_non_digits(text: &str) -> String {
    NON_DIGITS_RE.replace_all(text, "").into_owned()
}

// Upper-case a letter when it starts a word (previous char not a letter).
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
