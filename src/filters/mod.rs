//! Listing filter engine.
//!
//! Pure selection over a listing collection: a free-text query and a
//! [`FilterSpec`] narrow the input, and the output keeps the input order.
//! Listings are never cloned or modified, the result borrows from the input.

use crate::models::{FilterSpec, Listing};
use tracing::debug;

/// Select every listing matching both the text query and all active criteria
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    query: &str,
    spec: &FilterSpec,
) -> Vec<&'a Listing> {
    if spec.price_range.is_inverted() {
        debug!(
            "price range {}..={} is inverted, nothing can match",
            spec.price_range.min, spec.price_range.max
        );
    }

    let needle = normalize_query(query);
    listings
        .iter()
        .filter(|listing| matches_needle(listing, needle.as_deref()))
        .filter(|listing| matches_spec(listing, spec))
        .collect()
}

/// Text-only pass, structured criteria are ignored
pub fn search_only<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    let needle = normalize_query(query);
    listings
        .iter()
        .filter(|listing| matches_needle(listing, needle.as_deref()))
        .collect()
}

/// True when the listing satisfies every active criterion of `spec`
pub fn matches_spec(listing: &Listing, spec: &FilterSpec) -> bool {
    if let Some(visitors) = spec.visitors_allowed {
        if listing.rules.visitors_allowed != visitors {
            return false;
        }
    }

    if let Some(curfew) = spec.has_curfew {
        if listing.has_curfew() != curfew {
            return false;
        }
    }

    // Unchecking the box removes the constraint, it never asks for "no roommates"
    if spec.accepts_roommates == Some(true) && !listing.accepts_roommates {
        return false;
    }

    if !spec.price_range.contains(listing.price) {
        return false;
    }

    if let Some(policy) = spec.gender_policy {
        if listing.rules.gender_restricted != Some(policy) {
            return false;
        }
    }

    spec.amenities.is_subset(&listing.amenities)
}

/// Trimmed, lowercased query; `None` when blank
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match on title, address or school proximity.
/// A `None` needle (blank query) matches everything.
fn matches_needle(listing: &Listing, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    [
        &listing.title,
        &listing.address,
        &listing.school_proximity,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
