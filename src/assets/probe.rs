//! Existence probing over ordered candidate URLs.

use log::{debug, warn};
use reqwest::header::CACHE_CONTROL;

/// Existence check issued against a single candidate URL.
///
/// Implementations must treat every transport failure as "does not exist";
/// a missing asset is a normal outcome, never an error.
#[allow(async_fn_in_trait)]
pub trait AssetProbe {
    /// Returns `true` when a resource exists at `url`.
    async fn exists(&self, url: &str) -> bool;
}

/// HTTP `HEAD` probe backed by a shared client.
///
/// Probes bypass intermediary caches so that freshly uploaded assets are
/// visible immediately.
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Create a probe with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe reusing an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl AssetProbe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        match self
            .client
            .head(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                warn!("error probing {url}: {err}");
                false
            }
        }
    }
}

/// Resolve the first existing candidate, probing strictly in order.
///
/// Each probe is awaited before the next candidate is attempted and the scan
/// stops at the first success, so later candidates are never touched once an
/// earlier one resolves. Returns `None` when every probe fails.
pub async fn resolve_asset<P: AssetProbe>(probe: &P, candidates: &[String]) -> Option<String> {
    for candidate in candidates {
        if probe.exists(candidate).await {
            debug!("asset found: {candidate}");
            return Some(candidate.clone());
        }
    }

    debug!("no asset found among {} candidates", candidates.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Probe double that reports existence for a fixed URL and records every
    /// probe it receives.
    struct ScriptedProbe {
        existing: Option<String>,
        probed: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn with_existing(url: &str) -> Self {
            Self {
                existing: Some(url.to_string()),
                probed: Mutex::new(Vec::new()),
            }
        }

        fn all_missing() -> Self {
            Self {
                existing: None,
                probed: Mutex::new(Vec::new()),
            }
        }

        fn probed(&self) -> Vec<String> {
            self.probed.lock().unwrap().clone()
        }
    }

    impl AssetProbe for ScriptedProbe {
        async fn exists(&self, url: &str) -> bool {
            self.probed.lock().unwrap().push(url.to_string());
            self.existing.as_deref() == Some(url)
        }
    }

    fn candidates(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[tokio::test]
    async fn returns_first_existing_candidate_and_short_circuits() {
        let probe = ScriptedProbe::with_existing("b");
        let resolved = resolve_asset(&probe, &candidates(&["a", "b", "c"])).await;

        assert_eq!(resolved, Some("b".to_string()));
        // The probe for "c" never executes.
        assert_eq!(probe.probed(), candidates(&["a", "b"]));
    }

    #[tokio::test]
    async fn returns_none_when_every_probe_fails() {
        let probe = ScriptedProbe::all_missing();
        let resolved = resolve_asset(&probe, &candidates(&["a", "b", "c"])).await;

        assert_eq!(resolved, None);
        assert_eq!(probe.probed(), candidates(&["a", "b", "c"]));
    }

    #[tokio::test]
    async fn empty_candidate_lists_resolve_to_none() {
        let probe = ScriptedProbe::all_missing();
        assert_eq!(resolve_asset(&probe, &[]).await, None);
        assert!(probe.probed().is_empty());
    }
}
