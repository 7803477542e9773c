use crate::models::PriceRange;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Defaults for a browse session: slider bounds, amenity checkboxes, currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowseConfig {
    /// Lowest value the price slider can reach
    pub price_floor: i64,
    /// Highest value the price slider can reach
    pub price_ceiling: i64,
    /// Slider granularity
    pub price_step: i64,
    /// Amenities offered as checkboxes in the sidebar
    pub amenity_catalog: Vec<String>,
    /// Symbol printed in front of prices
    pub currency_symbol: String,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            price_floor: 3000,
            price_ceiling: 15000,
            price_step: 500,
            amenity_catalog: ["WiFi", "Laundry", "Kitchen", "Parking", "AC", "Security"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            currency_symbol: "₱".to_string(),
        }
    }
}

impl BrowseConfig {
    /// Load a JSON config file, missing keys fall back to the defaults
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.price_floor > config.price_ceiling {
            anyhow::bail!(
                "price floor {} is above price ceiling {}",
                config.price_floor,
                config.price_ceiling
            );
        }

        info!("Loaded browse config from {}", path.display());
        Ok(config)
    }

    /// Price range a fresh session starts with
    pub fn default_price_range(&self) -> PriceRange {
        PriceRange::new(self.price_floor, self.price_ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_sidebar() {
        let config = BrowseConfig::default();
        assert_eq!(config.default_price_range(), PriceRange::new(3000, 15000));
        assert_eq!(config.price_step, 500);
        assert_eq!(config.amenity_catalog.len(), 6);
        assert_eq!(config.currency_symbol, "₱");
    }

    #[tokio::test]
    async fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "priceCeiling": 20000 }}"#).unwrap();

        let config = BrowseConfig::from_file(file.path()).await.unwrap();
        assert_eq!(config.price_ceiling, 20000);
        assert_eq!(config.price_floor, 3000);
        assert_eq!(config.currency_symbol, "₱");
    }

    #[tokio::test]
    async fn inverted_bounds_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "priceFloor": 9000, "priceCeiling": 4000 }}"#).unwrap();

        assert!(BrowseConfig::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BrowseConfig::from_file(dir.path().join("nope.json"))
            .await
            .is_err());
    }
}
