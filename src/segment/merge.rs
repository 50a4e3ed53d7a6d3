//! Merge-back heuristics repairing over-eager sentence splits.

use std::sync::OnceLock;

use regex::Regex;

/// Characters that count as a closing quote at the end of a sentence.
const CLOSING_QUOTES: [char; 3] = ['"', '”', '\''];

/// Merge trigger for dialogue attributions in target-language text.
///
/// A candidate containing "asked" directly after a quoted sentence is almost
/// always the attribution of that quote rather than a sentence of its own.
pub fn attribution_trigger() -> &'static Regex {
    static TRIGGER: OnceLock<Regex> = OnceLock::new();
    TRIGGER.get_or_init(|| Regex::new(r"(?i)\basked\b").expect("invalid attribution trigger"))
}

/// Merge raw candidates back into display sentences.
///
/// A candidate is appended to the previous sentence (joined with a space)
/// when the trigger matches it and the previous sentence ends in a closing
/// quote, or when it starts with a lowercase continuation letter. Everything
/// else starts a new sentence.
pub(super) fn merge_candidates(candidates: Vec<String>, trigger: Option<&Regex>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for candidate in candidates {
        let trimmed = candidate.trim();

        if let Some(last) = merged.last_mut() {
            let triggered = trigger
                .is_some_and(|trigger| trigger.is_match(trimmed) && ends_with_closing_quote(last));
            if triggered || starts_with_continuation(trimmed) {
                last.push(' ');
                last.push_str(trimmed);
                continue;
            }
        }

        merged.push(trimmed.to_string());
    }

    merged
}

fn ends_with_closing_quote(sentence: &str) -> bool {
    sentence.ends_with(CLOSING_QUOTES)
}

/// Continuation letters are restricted to a narrow fixed alphabet rather than
/// general Unicode lowercase; accented Spanish vowels deliberately start new
/// sentences.
fn starts_with_continuation(candidate: &str) -> bool {
    candidate
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || matches!(c, 'æ' | 'ø' | 'å'))
}
