//! Boundary detection producing raw sentence candidates.

use std::sync::OnceLock;

use regex::Regex;

/// Quote characters collapsed to a plain ASCII double quote before splitting.
const QUOTE_VARIANTS: [char; 4] = ['“', '”', '«', '»'];

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // A quoted-or-unquoted run terminated by sentence punctuation, an
        // optional closing quote, and a whitespace or end-of-text boundary.
        // The boundary character is consumed rather than looked ahead at; the
        // candidate itself is capture group 1.
        Regex::new(r#"("?.+?[.!?…]"?)(?:\s|$)|\.\.\.""#).expect("invalid sentence pattern")
    })
}

/// Collapse typographic quote variants into ASCII double quotes.
pub(super) fn normalize_quotes(text: &str) -> String {
    text.replace(QUOTE_VARIANTS, "\"")
}

/// Split normalised text into raw sentence candidates.
///
/// When the pattern finds no boundary at all the whole input is returned as a
/// single candidate, so callers always receive at least one entry.
pub(super) fn split_candidates(text: &str) -> Vec<String> {
    let candidates: Vec<String> = sentence_pattern()
        .captures_iter(text)
        .map(|caps| {
            caps.get(1)
                .map_or_else(|| caps[0].to_string(), |m| m.as_str().to_string())
        })
        .collect();

    if candidates.is_empty() {
        return vec![text.to_string()];
    }
    candidates
}
