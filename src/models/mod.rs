use crate::error::BrowseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which gender(s) may occupy a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GenderPolicy {
    Male,
    Female,
    All,
}

impl FromStr for GenderPolicy {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "All" => Ok(Self::All),
            other => Err(BrowseError::invalid_input(
                "genderPolicy",
                format!("unknown policy '{}'", other),
            )),
        }
    }
}

impl fmt::Display for GenderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::All => "All",
        };
        f.write_str(s)
    }
}

/// House rules attached to a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseRules {
    pub visitors_allowed: bool,
    /// Time of day, e.g. "22:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curfew: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_restricted: Option<GenderPolicy>,
}

/// One rentable housing unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Image URLs, the first one is the cover
    #[serde(default)]
    pub images: Vec<String>,
    pub address: String,
    /// Monthly rent
    pub price: i64,
    pub description: String,
    /// e.g. "UP Diliman - 5 min walk"
    pub school_proximity: String,
    pub rules: HouseRules,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub is_rented: bool,
    pub accepts_roommates: bool,
    pub landlord_id: String,
    pub avg_rating: f32,
    pub total_reviews: u32,
    pub created_at: NaiveDate,
}

impl Listing {
    /// Check the record against the data model invariants
    pub fn validate(&self) -> Result<(), BrowseError> {
        if self.price < 0 {
            return Err(BrowseError::invalid_listing(
                &self.id,
                format!("negative price {}", self.price),
            ));
        }
        if !self.avg_rating.is_finite() || !(0.0..=5.0).contains(&self.avg_rating) {
            return Err(BrowseError::invalid_listing(
                &self.id,
                format!("rating {} outside [0, 5]", self.avg_rating),
            ));
        }
        Ok(())
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_curfew(&self) -> bool {
        self.rules.curfew.is_some()
    }

    /// Monthly price label such as "₱8,000/month"
    pub fn price_label(&self, currency: &str) -> String {
        format!("{}{}/month", currency, group_thousands(self.price))
    }
}

/// Insert a comma between every group of three digits
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Closed price interval, both ends inclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// An inverted range (min > max) contains nothing
    pub fn contains(&self, price: i64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(3000, 15000)
    }
}

/// Active structured search criteria
///
/// `None` on an optional criterion means "no preference", which is
/// different from an explicit `Some(false)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub visitors_allowed: Option<bool>,
    pub has_curfew: Option<bool>,
    /// Only `Some(true)` narrows the result
    pub accepts_roommates: Option<bool>,
    pub price_range: PriceRange,
    pub gender_policy: Option<GenderPolicy>,
    /// Every tag here must be offered by a matching listing
    pub amenities: BTreeSet<String>,
}

impl FilterSpec {
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Self::default()
        }
    }
}
