//! Catalog retrieval and CSV decoding.

use log::{info, warn};

use crate::catalog::CatalogCache;
use crate::config::SiteConfig;
use crate::models::StoryRecord;

/// Errors that can occur while fetching the story catalog.
///
/// Per-record decode problems are not errors; malformed rows are skipped
/// during parsing so one bad entry never hides the rest of the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog request failed at the transport level.
    Fetch {
        /// URL that was requested.
        url: String,
        /// Source transport error.
        source: reqwest::Error,
    },
    /// The content host answered with a non-success status.
    Status {
        /// URL that was requested.
        url: String,
        /// Status code returned by the host.
        status: reqwest::StatusCode,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch { url, source } => {
                write!(f, "failed to fetch {}: {}", url, source)
            }
            Self::Status { url, status } => {
                write!(f, "failed to fetch {}: HTTP status {}", url, status)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

/// Load the story catalog, consulting the local cache before the network.
///
/// A cache hit younger than the configured expiry skips the fetch entirely.
/// After a successful fetch the cache is rewritten; cache failures degrade to
/// plain fetching and never abort the load.
pub async fn load_catalog(config: &SiteConfig) -> Result<Vec<StoryRecord>, CatalogError> {
    let cache = CatalogCache::from_config(config);

    if let Some(body) = cache.fresh_body() {
        info!("loading stories from cache");
        return Ok(parse_catalog_csv(&body));
    }

    let url = config.catalog_url();
    let response = reqwest::get(&url).await.map_err(|source| CatalogError::Fetch {
        url: url.clone(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status { url, status });
    }

    let body = response.text().await.map_err(|source| CatalogError::Fetch {
        url: url.clone(),
        source,
    })?;

    cache.store(&body);
    Ok(parse_catalog_csv(&body))
}

/// Decode catalog CSV into story records.
///
/// Rows that fail to decode are skipped with a warning. Source-language
/// titles are trimmed on ingest since they act as the lookup key everywhere
/// else.
pub fn parse_catalog_csv(data: &str) -> Vec<StoryRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut stories = Vec::new();
    for (index, result) in reader.deserialize::<StoryRecord>().enumerate() {
        match result {
            Ok(mut story) => {
                story.title_source = story.title_source.trim().to_string();
                stories.push(story);
            }
            Err(err) => warn!("skipping story row {}: {}", index + 1, err),
        }
    }

    info!("parsed {} stories from catalog", stories.len());
    stories
}

/// Look up a story by its source-language title, the catalog's uniqueness key.
pub fn find_story<'a>(stories: &'a [StoryRecord], title_source: &str) -> Option<&'a StoryRecord> {
    stories
        .iter()
        .find(|story| story.title_source == title_source)
}
