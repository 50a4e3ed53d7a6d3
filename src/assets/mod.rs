//! Candidate expansion and existence probing for story media assets.
//!
//! This module intentionally splits the responsibilities into focused
//! submodules so that the logic for expanding a story title into candidate
//! URLs can be tested without a network, while the probing rules are shared
//! between audio and image resolution.

mod candidates;
mod probe;

pub use candidates::{audio_candidates, image_candidates};
pub use probe::{AssetProbe, HttpProbe, resolve_asset};
