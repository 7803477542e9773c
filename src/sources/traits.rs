use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

/// Common trait for every listing data source
/// Mock data, JSON files and remote stores all load through it
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full listing collection
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}

/// Drop records that break the data model invariants
pub(crate) fn keep_valid(source: &str, listings: Vec<Listing>) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|listing| match listing.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("{}: skipping record: {}", source, e);
                false
            }
        })
        .collect()
}
