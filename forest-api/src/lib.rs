//! HTTP clients for the two external services the dashboard talks to: the
//! forest-statistics API (precomputed stats per location/density) and the
//! analysis backend (LLM narrative + chat).
//!
//! `reqwest` backs both the native proxy and the wasm dashboard; on
//! `wasm32-unknown-unknown` it rides the browser's fetch API.

mod analysis;
mod client;
mod error;
pub mod endpoints;

pub use analysis::AnalysisClient;
pub use client::ForestApiClient;
pub use error::ApiError;
