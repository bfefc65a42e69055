//! Loading indicator component.

use dioxus::prelude::*;

/// Simple loading indicator shown while a fetch is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 48px; color: #9ca3af;",
            "Loading forest data..."
        }
    }
}
