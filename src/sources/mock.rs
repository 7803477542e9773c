use crate::models::{GenderPolicy, HouseRules, Listing};
use crate::sources::traits::{keep_valid, ListingSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

/// Fixed in-memory listings used until a real store exists
#[derive(Debug, Default)]
pub struct MockListingSource;

impl MockListingSource {
    pub fn new() -> Self {
        Self
    }
}

/// The fixed Manila student listings
pub(crate) fn mock_manila_listings() -> Result<Vec<Listing>> {
    Ok(vec![
        Listing {
            id: "1".to_string(),
            title: "Cozy Dorm Near UP Diliman".to_string(),
            images: vec!["/placeholder-dorm1.jpg".to_string()],
            address: "Quezon City, Manila".to_string(),
            price: 8000,
            description: "Clean and affordable dorm perfect for students".to_string(),
            school_proximity: "UP Diliman - 5 min walk".to_string(),
            rules: HouseRules {
                visitors_allowed: true,
                curfew: Some("22:00".to_string()),
                gender_restricted: Some(GenderPolicy::All),
            },
            amenities: tags(&["WiFi", "Laundry", "Kitchen"]),
            is_rented: false,
            accepts_roommates: false,
            landlord_id: "landlord1".to_string(),
            avg_rating: 4.5,
            total_reviews: 12,
            created_at: date(2024, 1, 1)?,
        },
        Listing {
            id: "2".to_string(),
            title: "Modern Studio Apartment".to_string(),
            images: vec!["/placeholder-apartment1.jpg".to_string()],
            address: "Taft Avenue, Manila".to_string(),
            price: 12000,
            description: "Fully furnished studio apartment near DLSU".to_string(),
            school_proximity: "DLSU - 10 min walk".to_string(),
            rules: HouseRules {
                visitors_allowed: false,
                curfew: None,
                gender_restricted: Some(GenderPolicy::Female),
            },
            amenities: tags(&["WiFi", "AC", "Security", "Parking"]),
            is_rented: true,
            accepts_roommates: true,
            landlord_id: "landlord2".to_string(),
            avg_rating: 4.8,
            total_reviews: 8,
            created_at: date(2024, 1, 2)?,
        },
    ])
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("📋 Generating mock Manila student listings");
        let listings = mock_manila_listings()?;
        Ok(keep_valid(self.source_name(), listings))
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

fn tags(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("Invalid mock date {}-{}-{}", year, month, day))
}
