#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod assets;
pub mod catalog;
pub mod config;
pub mod models;
pub mod rating;
pub mod segment;

pub use config::SiteConfig;
pub use models::{CefrLevel, SentencePair, StoryRecord};
