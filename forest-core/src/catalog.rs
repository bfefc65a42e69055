//! Location catalog: the fixed state list, the enumerated density set, and
//! the dropdown filtering rule.
//!
//! States are a static enumeration (the upstream dataset covers exactly
//! these); districts are fetched once per session from the
//! `available-locations` endpoint and cached by the filter state.

/// All states and union territories present in the upstream dataset, in
/// catalog order. The dropdown shows them in exactly this order.
pub const STATES: [&str; 36] = [
    "andaman and nicobar",
    "andhra pradesh",
    "arunachal pradesh",
    "assam",
    "bihar",
    "chandigarh",
    "chhattisgarh",
    "dadra and nagar haveli",
    "daman and diu",
    "goa",
    "gujarat",
    "haryana",
    "himachal pradesh",
    "jammu and kashmir",
    "jharkhand",
    "karnataka",
    "kerala",
    "lakshadweep",
    "madhya pradesh",
    "maharashtra",
    "manipur",
    "meghalaya",
    "mizoram",
    "nagaland",
    "nct of delhi",
    "odisha",
    "puducherry",
    "punjab",
    "rajasthan",
    "sikkim",
    "tamil nadu",
    "telangana",
    "tripura",
    "uttar pradesh",
    "uttarakhand",
    "west bengal",
];

/// Tree-density thresholds the upstream dataset is precomputed for.
pub const DENSITIES: [u8; 8] = [0, 10, 15, 20, 25, 30, 50, 75];

/// Whether `density` is one of the enumerated thresholds.
pub fn is_valid_density(density: u8) -> bool {
    DENSITIES.contains(&density)
}

/// Case-insensitive substring filter over a candidate list.
///
/// An empty term returns the full list unmodified, in catalog order.
pub fn filter_locations(candidates: &[String], term: &str) -> Vec<String> {
    if term.is_empty() {
        return candidates.to_vec();
    }
    let needle = term.to_lowercase();
    candidates
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Vec<String> {
        STATES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_term_returns_full_catalog_in_order() {
        let filtered = filter_locations(&states(), "");
        assert_eq!(filtered, states());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let filtered = filter_locations(&states(), "KeRa");
        assert_eq!(filtered, vec!["kerala"]);

        let filtered = filter_locations(&states(), "pradesh");
        assert_eq!(
            filtered,
            vec![
                "andhra pradesh",
                "arunachal pradesh",
                "himachal pradesh",
                "madhya pradesh",
                "uttar pradesh",
            ]
        );
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let filtered = filter_locations(&states(), "a");
        let full = states();
        let positions: Vec<usize> = filtered
            .iter()
            .map(|name| full.iter().position(|c| c == name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(filter_locations(&states(), "zzz").is_empty());
    }

    #[test]
    fn density_set_is_enforced() {
        for d in DENSITIES {
            assert!(is_valid_density(d));
        }
        assert!(!is_valid_density(40));
        assert!(!is_valid_density(100));
    }
}
