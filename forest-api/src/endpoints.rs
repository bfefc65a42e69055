//! Path construction for the upstream API.
//!
//! Location names are lower-cased here, once, so every caller builds the
//! same URL for the same selection.

use forest_core::{LocationType, Selection};

/// Default base URL of the forest-statistics service.
pub const UPSTREAM_BASE: &str = "https://tech-thrive.onrender.com";

/// Default base URL of the analysis/chat backend (development).
pub const ANALYSIS_BASE: &str = "http://localhost:5000";

pub const AVAILABLE_LOCATIONS_PATH: &str = "/data/available-locations";
pub const ANALYZE_PATH: &str = "/api/analyze";
pub const CHAT_PATH: &str = "/api/chat";

/// Path of the forest-data endpoint for a selection.
pub fn forest_data_path(selection: &Selection) -> String {
    match selection.location_type {
        LocationType::India => format!("/data/india/{}", selection.density),
        location_type => format!(
            "/data/{}/{}/{}",
            location_type.as_str(),
            selection.name.to_lowercase(),
            selection.density
        ),
    }
}

/// Path of the per-location densities endpoint.
pub fn densities_path(location: &str) -> String {
    format!("/data/densities?location={}", location.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(location_type: LocationType, name: &str, density: u8) -> Selection {
        Selection {
            location_type,
            name: name.to_string(),
            density,
        }
    }

    #[test]
    fn state_path_lower_cases_the_name() {
        let path = forest_data_path(&selection(LocationType::State, "Kerala", 30));
        assert_eq!(path, "/data/state/kerala/30");
    }

    #[test]
    fn district_path_uses_the_district_route() {
        let path = forest_data_path(&selection(LocationType::District, "Wayanad", 50));
        assert_eq!(path, "/data/district/wayanad/50");
    }

    #[test]
    fn india_path_carries_only_the_density() {
        let path = forest_data_path(&selection(LocationType::India, "india", 75));
        assert_eq!(path, "/data/india/75");
    }

    #[test]
    fn densities_path_lower_cases_the_location() {
        assert_eq!(densities_path("Kerala"), "/data/densities?location=kerala");
    }
}
