//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a fetch error in a styled banner. The previously rendered data
/// stays on screen below it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0 16px 0; background: #7f1d1d; color: #fca5a5; border-left: 4px solid #ef4444; border-radius: 4px;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
