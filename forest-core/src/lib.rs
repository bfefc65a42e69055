//! Domain model and UI state machines for the forest monitoring dashboard.
//!
//! Everything in this crate is pure: no I/O, no DOM, no async. The Dioxus
//! frontend and the proxy server both build on these types, and the
//! dashboard's behavioural rules (search filtering, selection invalidation,
//! fetch sequencing, chat threading) are unit-tested here without a browser.

pub mod catalog;
pub mod chart;
pub mod chat;
pub mod filter;
pub mod model;
pub mod session;

pub use chart::ChartSeries;
pub use chat::{ChatMessage, ChatThread, Sender, FALLBACK_REPLY};
pub use filter::{FilterState, Selection};
pub use model::{
    DensitiesResponse, ForestAnalysis, ForestRecord, ForestStats, LocationType,
    LocationsResponse, Measure, YearSeries, YearlyData,
};
pub use session::{FetchToken, Session, FETCH_ERROR_MESSAGE};
