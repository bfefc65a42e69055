//! The dropdown/filter state machine behind the selection form.
//!
//! This is a plain struct so every transition rule is testable without a
//! DOM. The Dioxus layer holds it in a signal and forwards UI events to
//! these methods.

use crate::catalog::{self, STATES};
use crate::model::LocationType;
use serde::{Deserialize, Serialize};

/// A complete, validated selection, frozen at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub location_type: LocationType,
    pub name: String,
    pub density: u8,
}

/// Filter form state: active catalog, free-text search, selection, dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    location_type: LocationType,
    selected_location: String,
    selected_density: Option<u8>,
    search_term: String,
    dropdown_open: bool,
    /// District catalog, fetched once per session. `None` until loaded.
    districts: Option<Vec<String>>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        FilterState {
            location_type: LocationType::State,
            selected_location: String::new(),
            selected_density: Some(30),
            search_term: String::new(),
            dropdown_open: false,
            districts: None,
        }
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn selected_location(&self) -> &str {
        &self.selected_location
    }

    pub fn selected_density(&self) -> Option<u8> {
        self.selected_density
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn districts_loaded(&self) -> bool {
        self.districts.is_some()
    }

    /// Switch the active catalog. Clears the selection and search term so
    /// stale data can never be shown under the new filter; returns whether
    /// anything changed (the session layer drops the displayed record on
    /// `true`).
    pub fn set_location_type(&mut self, location_type: LocationType) -> bool {
        if self.location_type == location_type {
            return false;
        }
        self.location_type = location_type;
        self.selected_location.clear();
        self.search_term.clear();
        self.dropdown_open = false;
        true
    }

    /// Install the session-cached district list.
    pub fn set_districts(&mut self, districts: Vec<String>) {
        self.districts = Some(districts);
    }

    /// Update the free-text filter. Opens the dropdown. If the text no
    /// longer equals the selected name, the selection is invalidated: the
    /// user must re-confirm via the dropdown before a fetch can fire.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.dropdown_open = true;
        if self.search_term != self.selected_location {
            self.selected_location.clear();
        }
    }

    /// Confirm a location from the dropdown. Only members of the currently
    /// filtered list are accepted.
    pub fn select_location(&mut self, name: &str) -> bool {
        if !self.filtered_locations().iter().any(|c| c == name) {
            return false;
        }
        self.selected_location = name.to_string();
        self.search_term = name.to_string();
        self.dropdown_open = false;
        true
    }

    /// Pick a density threshold; values outside the enumerated set are
    /// rejected.
    pub fn set_density(&mut self, density: u8) -> bool {
        if !catalog::is_valid_density(density) {
            return false;
        }
        self.selected_density = Some(density);
        true
    }

    /// Reset the selection and reopen the dropdown for immediate retyping.
    pub fn clear_selection(&mut self) {
        self.selected_location.clear();
        self.search_term.clear();
        self.dropdown_open = true;
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// The active catalog: the fixed state list, the cached district list,
    /// or nothing for the India-wide view (no location to pick).
    pub fn active_catalog(&self) -> Vec<String> {
        match self.location_type {
            LocationType::State => STATES.iter().map(|s| s.to_string()).collect(),
            LocationType::District => self.districts.clone().unwrap_or_default(),
            LocationType::India => Vec::new(),
        }
    }

    /// The dropdown contents for the current search term.
    pub fn filtered_locations(&self) -> Vec<String> {
        catalog::filter_locations(&self.active_catalog(), &self.search_term)
    }

    /// A complete selection, or `None` when preconditions for a fetch are
    /// not met. India needs no location name.
    pub fn selection(&self) -> Option<Selection> {
        let density = self.selected_density?;
        let name = match self.location_type {
            LocationType::India => "india".to_string(),
            _ if self.selected_location.is_empty() => return None,
            _ => self.selected_location.clone(),
        };
        Some(Selection {
            location_type: self.location_type,
            name,
            density,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_selection() {
        let filter = FilterState::new();
        assert_eq!(filter.location_type(), LocationType::State);
        assert_eq!(filter.selected_density(), Some(30));
        assert!(filter.selection().is_none());
    }

    #[test]
    fn select_requires_membership_in_filtered_list() {
        let mut filter = FilterState::new();
        filter.set_search_term("kera");
        assert_eq!(filter.filtered_locations(), vec!["kerala"]);
        assert!(!filter.select_location("goa"), "filtered out by search term");
        assert!(filter.select_location("kerala"));
        assert_eq!(filter.selected_location(), "kerala");
        assert_eq!(filter.search_term(), "kerala");
        assert!(!filter.dropdown_open());
    }

    #[test]
    fn retyping_invalidates_selection() {
        let mut filter = FilterState::new();
        filter.set_search_term("kerala");
        assert!(filter.select_location("kerala"));

        filter.set_search_term("keral");
        assert_eq!(filter.selected_location(), "");
        assert!(filter.dropdown_open());
        assert!(filter.selection().is_none());

        // Typing the exact selected name back does not reselect; the user
        // must confirm via the dropdown.
        filter.set_search_term("kerala");
        assert_eq!(filter.selected_location(), "");
    }

    #[test]
    fn location_type_change_clears_selection_and_search() {
        let mut filter = FilterState::new();
        filter.set_search_term("goa");
        assert!(filter.select_location("goa"));

        assert!(filter.set_location_type(LocationType::District));
        assert_eq!(filter.selected_location(), "");
        assert_eq!(filter.search_term(), "");
        assert!(filter.selection().is_none());

        // Re-setting the same type is a no-op.
        assert!(!filter.set_location_type(LocationType::District));
    }

    #[test]
    fn district_catalog_is_empty_until_loaded() {
        let mut filter = FilterState::new();
        filter.set_location_type(LocationType::District);
        assert!(!filter.districts_loaded());
        assert!(filter.filtered_locations().is_empty());

        filter.set_districts(vec!["wayanad".into(), "idukki".into()]);
        assert!(filter.districts_loaded());
        // Order as returned by the endpoint, not alphabetical.
        assert_eq!(filter.filtered_locations(), vec!["wayanad", "idukki"]);

        filter.set_search_term("way");
        assert_eq!(filter.filtered_locations(), vec!["wayanad"]);
        assert!(filter.select_location("wayanad"));
    }

    #[test]
    fn india_selection_needs_only_a_density() {
        let mut filter = FilterState::new();
        filter.set_location_type(LocationType::India);
        let selection = filter.selection().unwrap();
        assert_eq!(selection.name, "india");
        assert_eq!(selection.density, 30);
    }

    #[test]
    fn density_outside_enumerated_set_is_rejected() {
        let mut filter = FilterState::new();
        assert!(!filter.set_density(33));
        assert_eq!(filter.selected_density(), Some(30));
        assert!(filter.set_density(75));
        assert_eq!(filter.selected_density(), Some(75));
    }

    #[test]
    fn clear_selection_reopens_dropdown() {
        let mut filter = FilterState::new();
        filter.set_search_term("goa");
        filter.select_location("goa");
        filter.clear_selection();
        assert_eq!(filter.selected_location(), "");
        assert_eq!(filter.search_term(), "");
        assert!(filter.dropdown_open());
    }
}
