//! Data structures shared between the catalog, segmenter and asset resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single bilingual story parsed from the catalog CSV.
///
/// Records are immutable once parsed; the source-language title acts as the
/// uniqueness key within a catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    /// Story title in the source language.
    pub title_source: String,
    /// Story title in the target (translation) language.
    pub title_target: String,
    /// Full story text in the source language.
    pub source_text: String,
    /// Full story text in the target language.
    pub target_text: String,
    /// Free-form genre tag, matched case-insensitively when filtering.
    pub genre: String,
    /// CEFR difficulty tag attached to the story (A1–C2).
    pub level: String,
}

impl StoryRecord {
    /// Parsed CEFR level for this story.
    pub fn cefr(&self) -> CefrLevel {
        CefrLevel::parse(&self.level)
    }

    /// Whether the target-language title adds information beyond the source title.
    ///
    /// Listings only render the subtitle when the two titles differ.
    pub fn has_distinct_subtitle(&self) -> bool {
        self.title_source != self.title_target
    }
}

/// A positionally aligned pair of source and target sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentencePair {
    /// Sentence in the source language.
    pub source: String,
    /// Sentence in the target language; empty when the target text ran short.
    pub target: String,
}

/// CEFR proficiency tags used to filter stories by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CefrLevel {
    /// Beginner.
    A1,
    /// Elementary.
    A2,
    /// Intermediate.
    B1,
    /// Upper intermediate.
    B2,
    /// Advanced.
    C1,
    /// Proficient.
    C2,
    /// Missing or unrecognised level tag.
    Unknown,
}

impl CefrLevel {
    /// Parse a raw level tag, tolerating surrounding whitespace and case.
    ///
    /// A bare `"C"` is treated as C1, matching how the catalog has historically
    /// tagged a handful of advanced stories.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "A1" => Self::A1,
            "A2" => Self::A2,
            "B1" => Self::B1,
            "B2" => Self::B2,
            "C" | "C1" => Self::C1,
            "C2" => Self::C2,
            _ => Self::Unknown,
        }
    }

    /// Canonical display tag for the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::Unknown => "N/A",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
