//! Shared Dioxus components, application state and D3.js bridge for the
//! forest monitoring dashboard.

pub mod components;
pub mod hooks;
pub mod js_bridge;
pub mod state;

pub use state::{AppState, Theme};
