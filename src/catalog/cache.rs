//! Timestamped file cache for the downloaded catalog.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use log::warn;

use crate::config::SiteConfig;

/// File-backed cache holding the last downloaded catalog body next to the
/// time it was written.
///
/// The cache is best-effort: reads that fail for any reason report a miss and
/// writes that fail are logged and dropped, so a broken cache directory never
/// prevents the catalog from loading.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    body_path: PathBuf,
    stamp_path: PathBuf,
    expiry: Duration,
}

impl CatalogCache {
    /// Cache rooted at the configured cache directory.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.cache_body_path(),
            config.cache_stamp_path(),
            config.cache_expiry_hours,
        )
    }

    /// Cache over explicit file locations.
    pub fn new(body_path: PathBuf, stamp_path: PathBuf, expiry_hours: i64) -> Self {
        Self {
            body_path,
            stamp_path,
            expiry: Duration::hours(expiry_hours),
        }
    }

    /// Cached catalog body, if present and younger than the expiry window.
    pub fn fresh_body(&self) -> Option<String> {
        let stamp = fs::read_to_string(&self.stamp_path).ok()?;
        let written: DateTime<Utc> = stamp.trim().parse().ok()?;

        if Utc::now().signed_duration_since(written) >= self.expiry {
            return None;
        }

        fs::read_to_string(&self.body_path).ok()
    }

    /// Store a freshly downloaded body, logging and continuing on failure.
    pub fn store(&self, body: &str) {
        if let Err(err) = self.try_store(body) {
            warn!("failed to cache catalog: {err}");
        }
    }

    fn try_store(&self, body: &str) -> std::io::Result<()> {
        if let Some(parent) = self.body_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.body_path, body)?;
        fs::write(&self.stamp_path, Utc::now().to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cache_in(dir: &std::path::Path, expiry_hours: i64) -> CatalogCache {
        CatalogCache::new(
            dir.join("catalog.csv"),
            dir.join("catalog.stamp"),
            expiry_hours,
        )
    }

    #[test]
    fn missing_cache_reports_a_miss() {
        let temp = tempdir().unwrap();
        assert_eq!(cache_in(temp.path(), 1).fresh_body(), None);
    }

    #[test]
    fn stored_body_is_fresh_until_expiry() {
        let temp = tempdir().unwrap();
        let cache = cache_in(temp.path(), 1);

        cache.store("titleSource,titleTarget\n");
        assert_eq!(
            cache.fresh_body(),
            Some("titleSource,titleTarget\n".to_string())
        );
    }

    #[test]
    fn stale_stamps_report_a_miss() {
        let temp = tempdir().unwrap();
        let cache = cache_in(temp.path(), 1);

        cache.store("body");
        let stale = (Utc::now() - Duration::hours(2)).to_rfc3339();
        fs::write(temp.path().join("catalog.stamp"), stale).unwrap();

        assert_eq!(cache.fresh_body(), None);
    }

    #[test]
    fn corrupt_stamps_report_a_miss() {
        let temp = tempdir().unwrap();
        let cache = cache_in(temp.path(), 1);

        cache.store("body");
        fs::write(temp.path().join("catalog.stamp"), "not a timestamp").unwrap();

        assert_eq!(cache.fresh_body(), None);
    }

    #[test]
    fn store_creates_the_cache_directory() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("nested/cache");
        let cache = cache_in(&nested, 1);

        cache.store("body");
        assert!(nested.join("catalog.csv").exists());
        assert!(nested.join("catalog.stamp").exists());
    }
}
