use crate::models::Listing;
use crate::sources::traits::{keep_valid, ListingSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listings served as a JSON array by a remote store
pub struct RemoteListingSource {
    client: Client,
    url: String,
}

impl RemoteListingSource {
    /// Create a source pointing at `url`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("dorm-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ListingSource for RemoteListingSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("Fetching listings from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listing store returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let body = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let listings: Vec<Listing> =
            serde_json::from_str(&body).context("Failed to parse listing JSON")?;

        Ok(keep_valid(self.source_name(), listings))
    }

    fn source_name(&self) -> &'static str {
        "Remote"
    }
}
