//! Dropdown selector for the location type (state / district / India).

use crate::state::AppState;
use dioxus::prelude::*;
use forest_core::LocationType;

/// Location-type selector. Switching the type clears the current selection,
/// search term and any displayed record (handled by the session).
#[component]
pub fn LocationTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let current = state.session.read().filter.location_type();

    let on_change = move |evt: Event<FormData>| {
        if let Some(location_type) = LocationType::parse(&evt.value()) {
            state.session.write().set_location_type(location_type);
        }
    };

    rsx! {
        div {
            label {
                style: "display: block; font-size: 13px; font-weight: 600; margin-bottom: 4px;",
                "Location Type"
            }
            select {
                style: "{theme.input_style()}",
                onchange: on_change,
                option {
                    value: "state",
                    selected: current == LocationType::State,
                    "State"
                }
                option {
                    value: "district",
                    selected: current == LocationType::District,
                    "District"
                }
                option {
                    value: "india",
                    selected: current == LocationType::India,
                    "All India"
                }
            }
        }
    }
}
