//! Searchable location dropdown with clear button and outside-click close.

use crate::hooks::use_outside_click;
use crate::state::AppState;
use dioxus::prelude::*;
use forest_core::LocationType;

/// DOM id of the dropdown subtree, used by the outside-click hook.
const DROPDOWN_ID: &str = "location-dropdown";

/// Searchable dropdown over the active location catalog.
///
/// Typing filters with a case-insensitive substring match and invalidates a
/// selection whose label no longer matches the text; picking an entry sets
/// both the selection and the search term. Hidden for the India-wide view.
#[component]
pub fn LocationDropdown() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();

    use_outside_click(DROPDOWN_ID, move || {
        state.session.write().filter.close_dropdown();
    });

    let session = state.session.read();
    let location_type = session.filter.location_type();
    if location_type == LocationType::India {
        return rsx! {};
    }

    let search_term = session.filter.search_term().to_string();
    let selected = session.filter.selected_location().to_string();
    let dropdown_open = session.filter.dropdown_open();
    let filtered = session.filter.filtered_locations();
    drop(session);

    let label = match location_type {
        LocationType::District => "District",
        _ => "State",
    };
    let placeholder = format!("Search {}...", label.to_lowercase());

    rsx! {
        div {
            id: "{DROPDOWN_ID}",
            label {
                style: "display: block; font-size: 13px; font-weight: 600; margin-bottom: 4px;",
                "{label}"
            }
            div {
                style: "position: relative;",
                input {
                    r#type: "text",
                    style: "{theme.input_style()}",
                    value: "{search_term}",
                    placeholder: "{placeholder}",
                    oninput: move |evt: Event<FormData>| {
                        state.session.write().filter.set_search_term(&evt.value());
                    },
                    onfocus: move |_| {
                        state.session.write().filter.open_dropdown();
                    },
                }
                if !search_term.is_empty() {
                    button {
                        r#type: "button",
                        style: "position: absolute; right: 8px; top: 8px; background: none; border: none; color: {theme.muted_color()}; cursor: pointer;",
                        onclick: move |_| {
                            state.session.write().filter.clear_selection();
                        },
                        "x"
                    }
                }
                if dropdown_open {
                    div {
                        style: "position: absolute; z-index: 10; width: 100%; margin-top: 4px; max-height: 240px; overflow-y: auto; {theme.card_style()}",
                        if filtered.is_empty() {
                            div {
                                style: "padding: 8px 12px; color: {theme.muted_color()};",
                                "No {label.to_lowercase()}s found"
                            }
                        } else {
                            for location in filtered {
                                button {
                                    key: "{location}",
                                    r#type: "button",
                                    // Catalog names are lowercase; capitalize
                                    // every word, as the record card does.
                                    style: format!(
                                        "display: block; width: 100%; text-align: left; padding: 8px 12px; background: {}; color: inherit; border: none; cursor: pointer; text-transform: capitalize;",
                                        if location == selected { "#374151" } else { "transparent" }
                                    ),
                                    onclick: {
                                        let location = location.clone();
                                        move |_| {
                                            state.session.write().filter.select_location(&location);
                                        }
                                    },
                                    "{location}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
