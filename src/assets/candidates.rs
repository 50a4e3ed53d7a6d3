//! Candidate URL expansion for audio and image assets.

use std::collections::BTreeSet;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::SiteConfig;

/// Extensions probed for narration audio, in preference order.
const AUDIO_EXTENSIONS: [&str; 2] = ["m4a", "mp3"];

/// Extensions probed for story illustrations, in preference order.
const IMAGE_EXTENSIONS: [&str; 6] = ["webp", "jpg", "jpeg", "avif", "png", "gif"];

/// Characters escaped when embedding a title in a URL path segment, matching
/// the component encoding browsers apply.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generate candidate URLs for a story's narration audio.
///
/// Ordering is significant: the resolver takes the first candidate that
/// exists, so preferred encodings come first.
pub fn audio_candidates(config: &SiteConfig, title: &str) -> Vec<String> {
    let encoded = encode_component(title);
    AUDIO_EXTENSIONS
        .iter()
        .map(|ext| asset_url(config, &config.audio_dir, &encoded, ext))
        .collect()
}

/// Generate candidate URLs for a story's illustration image.
///
/// Titles ending in a question mark exist on the content host both with and
/// without the trailing `?`, so both variants are expanded across every
/// supported extension. Coinciding variants are deduplicated while preserving
/// first-occurrence order.
pub fn image_candidates(config: &SiteConfig, title: &str) -> Vec<String> {
    let stripped = title.strip_suffix('?').unwrap_or(title);

    let mut seen = BTreeSet::new();
    let mut result = Vec::new();
    for variant in [title, stripped] {
        let encoded = encode_component(variant);
        for ext in IMAGE_EXTENSIONS {
            let url = asset_url(config, &config.images_dir, &encoded, ext);
            if seen.insert(url.clone()) {
                result.push(url);
            }
        }
    }
    result
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn asset_url(config: &SiteConfig, dir: &str, encoded_title: &str, ext: &str) -> String {
    config.resolve_url(&format!(
        "{}/{}.{}",
        dir.trim_matches('/'),
        encoded_title,
        ext
    ))
}
