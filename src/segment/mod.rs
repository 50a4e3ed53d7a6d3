//! Heuristic sentence segmentation for bilingual story text.
//!
//! This module intentionally splits the responsibilities into focused
//! submodules so that boundary detection, the merge-back heuristics and the
//! bilingual pairing step can be tested independently. The same segmentation
//! code runs over both languages of a story; only the merge trigger differs.

mod boundaries;
mod merge;
mod pairing;

pub use merge::attribution_trigger;
pub use pairing::pair_sentences;

use regex::Regex;

use boundaries::{normalize_quotes, split_candidates};
use merge::merge_candidates;

/// Split story text into display sentences.
///
/// Quote variants are normalised first, then the text is split on terminal
/// punctuation and candidates are merged back together where the split was
/// heuristically wrong (lowercase continuations).
pub fn segment(text: &str) -> Vec<String> {
    segment_with(text, None)
}

/// Segment text with an additional merge trigger applied during the
/// merge-back pass.
///
/// The trigger marks candidates that belong to the preceding sentence when it
/// ends in a closing quote, such as dialogue attributions. Target-language
/// text is segmented with [`attribution_trigger`]; source-language text runs
/// without one.
pub fn segment_with(text: &str, trigger: Option<&Regex>) -> Vec<String> {
    let normalized = normalize_quotes(text);
    let candidates = split_candidates(&normalized);
    merge_candidates(candidates, trigger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_sentences() {
        let sentences = segment("El sol brillaba. Los pájaros cantaban.");
        assert_eq!(sentences, vec![
            "El sol brillaba.".to_string(),
            "Los pájaros cantaban.".to_string(),
        ]);
    }

    #[test]
    fn text_without_terminal_punctuation_is_a_single_sentence() {
        let sentences = segment("  una frase sin puntuación final  ");
        assert_eq!(sentences, vec!["una frase sin puntuación final".to_string()]);
    }

    #[test]
    fn merges_lowercase_continuation_after_quoted_dialogue() {
        let sentences = segment(r#"She said, "I'm leaving." he replied."#);
        assert_eq!(sentences, vec![
            r#"She said, "I'm leaving." he replied."#.to_string()
        ]);
    }

    #[test]
    fn attribution_trigger_reattaches_asked_sentences() {
        let sentences = segment_with(
            r#""Where are you going?" Asked the old man."#,
            Some(attribution_trigger()),
        );
        assert_eq!(sentences, vec![
            r#""Where are you going?" Asked the old man."#.to_string()
        ]);
    }

    #[test]
    fn normalises_curly_and_angle_quotes() {
        let sentences = segment("«Hola» dijo. “Adiós” dijo.");
        assert_eq!(sentences, vec![
            "\"Hola\" dijo.".to_string(),
            "\"Adiós\" dijo.".to_string(),
        ]);
    }

    #[test]
    fn handles_ellipsis_terminated_sentences() {
        let sentences = segment("Esperó… Nadie llegó.");
        assert_eq!(sentences, vec![
            "Esperó…".to_string(),
            "Nadie llegó.".to_string(),
        ]);
    }

    #[test]
    fn resegmenting_punctuated_output_is_stable() {
        let first = segment("El sol brillaba. Los pájaros cantaban. Todo estaba en calma.");
        let second = segment(&first.join(" "));
        assert_eq!(first, second);
    }
}
