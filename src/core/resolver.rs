use crate::core::season::{Hemisphere, Season};
use crate::models::LocationInfo;

/// Which outbound lookups a submission requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPlan {
    /// Neither season nor location supplied: geolocate, then infer the season
    Full,
    /// Only the location is missing: geolocate for the country code
    LocationOnly,
    /// Nothing to look up
    Skip,
}

/// A fully resolved pairing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub season: Season,
    pub region: String,
}

/// Resolves the season and region for a submission
///
/// Decides which lookups are needed and combines the form input, the
/// optional geolocation result and the configured fallbacks into a
/// `Resolution`. The decision table:
/// 1. Season and location both absent: full inference (lookup + season
///    from the current month).
/// 2. Location absent: lookup for the country code only.
/// 3. Season present but not a valid label: overwrite it via inference,
///    ignoring the supplied value.
/// 4. Otherwise both supplied values are used as-is.
#[derive(Debug, Clone)]
pub struct Resolver {
    default_region: String,
    default_hemisphere: Hemisphere,
}

impl Resolver {
    pub fn new(default_region: impl Into<String>, default_hemisphere: Hemisphere) -> Self {
        Self {
            default_region: default_region.into(),
            default_hemisphere,
        }
    }

    /// Decide whether the submission needs a geolocation lookup
    pub fn plan(&self, season: Option<&str>, location: Option<&str>) -> LookupPlan {
        match (season, location) {
            (None, None) => LookupPlan::Full,
            (_, None) => LookupPlan::LocationOnly,
            _ => LookupPlan::Skip,
        }
    }

    /// Combine form input, lookup result and configured defaults
    ///
    /// A season label that parses (case-insensitively) is always kept; any
    /// other value is replaced by inference from the month. The hemisphere
    /// comes from the lookup's latitude sign when a lookup succeeded, and
    /// from configuration otherwise.
    pub fn resolve(
        &self,
        season: Option<&str>,
        location: Option<&str>,
        lookup: Option<&LocationInfo>,
        month: u32,
    ) -> Resolution {
        let region = location
            .map(str::to_string)
            .or_else(|| lookup.map(|info| info.country_code.clone()))
            .unwrap_or_else(|| self.default_region.clone());

        let season = season.and_then(Season::parse).unwrap_or_else(|| {
            let hemisphere = lookup
                .map(|info| Hemisphere::from_latitude(info.latitude))
                .unwrap_or(self.default_hemisphere);
            Season::for_month(month, hemisphere)
        });

        Resolution { season, region }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new("france", Hemisphere::Northern)
    }

    fn lookup(country: &str, latitude: f64) -> LocationInfo {
        LocationInfo {
            country_code: country.to_string(),
            latitude,
        }
    }

    #[test]
    fn test_plan_full_when_both_absent() {
        assert_eq!(resolver().plan(None, None), LookupPlan::Full);
    }

    #[test]
    fn test_plan_location_only_when_location_absent() {
        assert_eq!(resolver().plan(Some("winter"), None), LookupPlan::LocationOnly);
        assert_eq!(resolver().plan(Some("monsoon"), None), LookupPlan::LocationOnly);
    }

    #[test]
    fn test_plan_skip_when_location_present() {
        assert_eq!(resolver().plan(Some("winter"), Some("FR")), LookupPlan::Skip);
        assert_eq!(resolver().plan(None, Some("FR")), LookupPlan::Skip);
    }

    #[test]
    fn test_valid_season_is_kept_verbatim() {
        let resolution = resolver().resolve(Some("Winter"), Some("FR"), None, 7);
        assert_eq!(resolution.season, Season::Winter);
        assert_eq!(resolution.region, "FR");
    }

    #[test]
    fn test_invalid_season_is_overridden_by_inference() {
        // July, configured northern hemisphere: "invalid_value" must not survive
        let resolution = resolver().resolve(Some("invalid_value"), Some("FR"), None, 7);
        assert_eq!(resolution.season, Season::Summer);
        assert_eq!(resolution.region, "FR");
    }

    #[test]
    fn test_full_inference_uses_lookup() {
        let info = lookup("AU", -33.86);
        let resolution = resolver().resolve(None, None, Some(&info), 1);
        // January in the southern hemisphere
        assert_eq!(resolution.season, Season::Summer);
        assert_eq!(resolution.region, "AU");
    }

    #[test]
    fn test_failed_lookup_falls_back_to_configured_defaults() {
        let resolution = resolver().resolve(None, None, None, 1);
        assert_eq!(resolution.season, Season::Winter);
        assert_eq!(resolution.region, "france");
    }

    #[test]
    fn test_location_only_keeps_supplied_season() {
        let info = lookup("DE", 52.52);
        let resolution = resolver().resolve(Some("autumn"), None, Some(&info), 1);
        assert_eq!(resolution.season, Season::Autumn);
        assert_eq!(resolution.region, "DE");
    }
}
