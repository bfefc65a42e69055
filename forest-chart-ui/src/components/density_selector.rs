//! Dropdown selector for the tree-density threshold.

use crate::state::AppState;
use dioxus::prelude::*;
use forest_core::catalog::DENSITIES;

/// Density threshold selector over the fixed enumerated set.
#[component]
pub fn DensitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let selected = state.session.read().filter.selected_density();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(density) = evt.value().parse::<u8>() {
            state.session.write().filter.set_density(density);
        }
    };

    rsx! {
        div {
            label {
                style: "display: block; font-size: 13px; font-weight: 600; margin-bottom: 4px;",
                "Density Threshold (%)"
            }
            select {
                style: "{theme.input_style()}",
                onchange: on_change,
                for density in DENSITIES {
                    option {
                        value: "{density}",
                        selected: selected == Some(density),
                        "{density}%"
                    }
                }
            }
        }
    }
}
