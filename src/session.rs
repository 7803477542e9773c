use crate::config::BrowseConfig;
use crate::error::BrowseError;
use crate::filters::filter_listings;
use crate::models::{FilterSpec, GenderPolicy, Listing};
use tracing::{debug, warn};

/// A single sidebar or search-box interaction
#[derive(Debug, Clone, PartialEq)]
pub enum FilterControl {
    /// Visitors radio: Any (`None`), allowed, or no visitors
    Visitors(Option<bool>),
    /// Raw value of the price ceiling slider
    PriceCeiling(String),
    /// "Accepting roommates" checkbox
    Roommates(bool),
    /// Gender dropdown value, empty string means Any
    Gender(String),
    /// One amenity checkbox toggled
    Amenity { name: String, checked: bool },
    /// Curfew radio: Any (`None`), has curfew, or no curfew
    Curfew(Option<bool>),
}

/// Browse state owned by the presentation layer for one session.
///
/// Holds the full collection plus the current query and filter spec.
/// Results are always computed from the full collection with both applied.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    listings: Vec<Listing>,
    query: String,
    spec: FilterSpec,
    config: BrowseConfig,
}

impl BrowseSession {
    pub fn new(listings: Vec<Listing>, config: BrowseConfig) -> Self {
        let spec = FilterSpec::with_price_range(config.default_price_range());
        Self {
            listings,
            query: String::new(),
            spec,
            config,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// The full collection, unfiltered
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Submit a new search query
    pub fn search(&mut self, query: &str) -> Vec<&Listing> {
        self.query = query.trim().to_string();
        debug!("Search query set to '{}'", self.query);
        self.results()
    }

    /// Apply one control event to the filter spec.
    ///
    /// On error the previous spec is kept.
    pub fn apply(&mut self, control: FilterControl) -> Result<Vec<&Listing>, BrowseError> {
        let mut next = self.spec.clone();

        match control {
            FilterControl::Visitors(value) => next.visitors_allowed = value,
            FilterControl::Curfew(value) => next.has_curfew = value,
            FilterControl::Roommates(checked) => {
                next.accepts_roommates = if checked { Some(true) } else { None };
            }
            FilterControl::PriceCeiling(raw) => {
                next.price_range.max = parse_price(&raw, &self.config)?;
            }
            FilterControl::Gender(raw) => {
                next.gender_policy = if raw.is_empty() {
                    None
                } else {
                    Some(raw.parse::<GenderPolicy>()?)
                };
            }
            FilterControl::Amenity { name, checked } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(BrowseError::invalid_input("amenities", "empty amenity name"));
                }
                if !self.config.amenity_catalog.iter().any(|a| a == name) {
                    warn!("Amenity '{}' is not part of the catalog", name);
                }
                if checked {
                    next.amenities.insert(name.to_string());
                } else {
                    next.amenities.remove(name);
                }
            }
        }

        self.spec = next;
        debug!("Filter spec updated: {:?}", self.spec);
        Ok(self.results())
    }

    /// Back to the session defaults, the query is kept
    pub fn reset_filters(&mut self) -> Vec<&Listing> {
        self.spec = FilterSpec::with_price_range(self.config.default_price_range());
        self.results()
    }

    /// Listings matching the current query and spec, in collection order
    pub fn results(&self) -> Vec<&Listing> {
        filter_listings(&self.listings, &self.query, &self.spec)
    }

    pub fn result_count(&self) -> usize {
        self.results().len()
    }

    /// True when the current criteria leave nothing to show
    pub fn is_empty_result(&self) -> bool {
        self.result_count() == 0
    }
}

/// Parse a slider value. Values below the floor are let through and
/// produce an inverted range.
fn parse_price(raw: &str, config: &BrowseConfig) -> Result<i64, BrowseError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| BrowseError::invalid_input("priceRange", format!("'{}': {}", raw, e)))?;
    if value < 0 {
        return Err(BrowseError::invalid_input(
            "priceRange",
            format!("negative price {}", value),
        ));
    }
    if value > config.price_ceiling {
        return Err(BrowseError::invalid_input(
            "priceRange",
            format!("{} is above the slider ceiling {}", value, config.price_ceiling),
        ));
    }
    if value >= config.price_floor
        && config.price_step > 0
        && (value - config.price_floor) % config.price_step != 0
    {
        return Err(BrowseError::invalid_input(
            "priceRange",
            format!(
                "{} is not on a {} step from {}",
                value, config.price_step, config.price_floor
            ),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{dorm_near_up, studio_on_taft};

    fn session() -> BrowseSession {
        BrowseSession::new(vec![dorm_near_up(), studio_on_taft()], BrowseConfig::default())
    }

    fn ids(result: Vec<&Listing>) -> Vec<String> {
        result.into_iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn fresh_session_shows_everything() {
        let s = session();
        assert_eq!(s.query(), "");
        assert_eq!(s.spec().price_range.min, 3000);
        assert_eq!(s.spec().price_range.max, 15000);
        assert_eq!(s.result_count(), 2);
        assert!(!s.is_empty_result());
    }

    #[test]
    fn search_keeps_active_filters() {
        let mut s = session();
        s.apply(FilterControl::Visitors(Some(false))).unwrap();
        // the search pass still honours the visitors filter
        assert_eq!(ids(s.search("manila")), vec!["2"]);
    }

    #[test]
    fn filter_change_keeps_active_query() {
        let mut s = session();
        s.search("diliman");
        let result = s.apply(FilterControl::Roommates(false)).unwrap();
        assert_eq!(ids(result), vec!["1"]);
    }

    #[test]
    fn unchecking_roommates_removes_constraint() {
        let mut s = session();
        assert_eq!(ids(s.apply(FilterControl::Roommates(true)).unwrap()), vec!["2"]);
        assert_eq!(s.apply(FilterControl::Roommates(false)).unwrap().len(), 2);
        assert_eq!(s.spec().accepts_roommates, None);
    }

    #[test]
    fn visitors_any_resets_criterion() {
        let mut s = session();
        assert_eq!(ids(s.apply(FilterControl::Visitors(Some(true))).unwrap()), vec!["1"]);
        assert_eq!(s.apply(FilterControl::Visitors(None)).unwrap().len(), 2);
    }

    #[test]
    fn price_slider_sets_ceiling() {
        let mut s = session();
        let result = s
            .apply(FilterControl::PriceCeiling("10000".to_string()))
            .unwrap();
        assert_eq!(ids(result), vec!["1"]);
        assert_eq!(s.spec().price_range.min, 3000);
    }

    #[test]
    fn bad_slider_value_is_invalid_input_and_keeps_spec() {
        let mut s = session();
        s.apply(FilterControl::PriceCeiling("10000".to_string()))
            .unwrap();

        let err = s
            .apply(FilterControl::PriceCeiling("NaN".to_string()))
            .unwrap_err();
        assert!(matches!(err, BrowseError::InvalidInput { field: "priceRange", .. }));
        assert!(s
            .apply(FilterControl::PriceCeiling("-500".to_string()))
            .is_err());
        assert_eq!(s.spec().price_range.max, 10000);
    }

    #[test]
    fn slider_value_above_ceiling_is_rejected() {
        let mut s = session();
        let err = s
            .apply(FilterControl::PriceCeiling("99999".to_string()))
            .unwrap_err();
        assert!(matches!(err, BrowseError::InvalidInput { field: "priceRange", .. }));
        assert_eq!(s.spec().price_range.max, 15000);
        assert!(s
            .apply(FilterControl::PriceCeiling("15000".to_string()))
            .is_ok());
    }

    #[test]
    fn slider_value_off_step_is_rejected() {
        let mut s = session();
        let err = s
            .apply(FilterControl::PriceCeiling("7777".to_string()))
            .unwrap_err();
        assert!(matches!(err, BrowseError::InvalidInput { field: "priceRange", .. }));
        assert_eq!(s.spec().price_range.max, 15000);
        assert!(s
            .apply(FilterControl::PriceCeiling("7500".to_string()))
            .is_ok());
    }

    #[test]
    fn slider_follows_configured_bounds() {
        let config = BrowseConfig {
            price_ceiling: 20000,
            price_step: 1000,
            ..BrowseConfig::default()
        };
        let mut s = BrowseSession::new(vec![dorm_near_up(), studio_on_taft()], config);
        assert!(s
            .apply(FilterControl::PriceCeiling("20000".to_string()))
            .is_ok());
        assert!(s
            .apply(FilterControl::PriceCeiling("8500".to_string()))
            .is_err());
    }

    #[test]
    fn ceiling_below_floor_yields_empty_result() {
        let mut s = session();
        let result = s
            .apply(FilterControl::PriceCeiling("1000".to_string()))
            .unwrap();
        assert!(result.is_empty());
        assert!(s.is_empty_result());
    }

    #[test]
    fn gender_dropdown_maps_empty_to_any() {
        let mut s = session();
        assert_eq!(
            ids(s.apply(FilterControl::Gender("All".to_string())).unwrap()),
            vec!["1"]
        );
        assert_eq!(s.apply(FilterControl::Gender(String::new())).unwrap().len(), 2);
        assert!(s.apply(FilterControl::Gender("Other".to_string())).is_err());
        assert_eq!(s.spec().gender_policy, None);
    }

    #[test]
    fn amenity_checkboxes_accumulate() {
        let mut s = session();
        let check = |name: &str, checked| FilterControl::Amenity {
            name: name.to_string(),
            checked,
        };

        assert_eq!(s.apply(check("WiFi", true)).unwrap().len(), 2);
        assert_eq!(ids(s.apply(check("Kitchen", true)).unwrap()), vec!["1"]);
        assert!(s.apply(check("Parking", true)).unwrap().is_empty());
        assert_eq!(ids(s.apply(check("Kitchen", false)).unwrap()), vec!["2"]);
        assert!(s.apply(check("  ", true)).is_err());
    }

    #[test]
    fn curfew_control_is_wired() {
        let mut s = session();
        assert_eq!(ids(s.apply(FilterControl::Curfew(Some(false))).unwrap()), vec!["2"]);
        assert_eq!(ids(s.apply(FilterControl::Curfew(Some(true))).unwrap()), vec!["1"]);
    }

    #[test]
    fn reset_filters_keeps_query() {
        let mut s = session();
        s.search("taft");
        s.apply(FilterControl::Visitors(Some(true))).unwrap();
        assert!(s.is_empty_result());

        assert_eq!(ids(s.reset_filters()), vec!["2"]);
        assert_eq!(s.query(), "taft");
        assert_eq!(s.spec(), &FilterSpec::default());
    }
}
