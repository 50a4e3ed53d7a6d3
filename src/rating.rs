//! Star-rating submission to the remote feedback form.

use anyhow::{Context, Result, anyhow};
use log::info;

use crate::config::SiteConfig;

/// Submit a star rating for a story to the configured form endpoint.
///
/// The form accepts values from one to five stars. The response body is
/// ignored: the endpoint answers opaquely to anonymous clients, so a
/// completed request is the only success signal available. Transport
/// failures are reported to the caller.
pub async fn submit_rating(
    config: &SiteConfig,
    client: &reqwest::Client,
    title: &str,
    stars: u8,
) -> Result<()> {
    if !(1..=5).contains(&stars) {
        return Err(anyhow!("rating must be between 1 and 5 stars, got {stars}"));
    }

    let form = reqwest::multipart::Form::new()
        .text(config.rating_title_entry.clone(), title.to_string())
        .text(config.rating_stars_entry.clone(), stars.to_string());

    client
        .post(&config.rating_form_url)
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("failed to submit rating for {title}"))?;

    info!("submitted {stars}-star rating for {title}");
    Ok(())
}
