//! Pairing of source and target sentences into aligned couplets.

use crate::models::SentencePair;

use super::{attribution_trigger, segment, segment_with};

/// Segment both language texts of a story and align them by position.
///
/// Alignment assumes the two texts segment into the same number of sentences.
/// When the target runs short the pair carries an empty target string; extra
/// target sentences beyond the source count are dropped. Neither mismatch is
/// an error.
pub fn pair_sentences(source_text: &str, target_text: &str) -> Vec<SentencePair> {
    let source = segment(source_text);
    let target = segment_with(target_text, Some(attribution_trigger()));

    source
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| SentencePair {
            target: target.get(index).cloned().unwrap_or_default(),
            source: sentence,
        })
        .collect()
}
