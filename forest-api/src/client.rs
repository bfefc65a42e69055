//! Client for the upstream forest-statistics API.

use crate::endpoints;
use crate::error::ApiError;
use forest_core::model::DensitiesResponse;
use forest_core::{ForestRecord, LocationsResponse, Selection};
use serde::de::DeserializeOwned;

/// Thin typed wrapper over the upstream REST endpoints.
#[derive(Clone)]
pub struct ForestApiClient {
    http: reqwest::Client,
    base: String,
}

impl ForestApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        ForestApiClient {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Client against the production upstream.
    pub fn default_upstream() -> Self {
        Self::new(endpoints::UPSTREAM_BASE)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the precomputed statistics for one selection.
    pub async fn fetch_forest_data(&self, selection: &Selection) -> Result<ForestRecord, ApiError> {
        let path = endpoints::forest_data_path(selection);
        log::info!("fetching forest data: {}", path);
        self.get_json(&path).await
    }

    /// Fetch the state and district catalogs.
    pub async fn fetch_available_locations(&self) -> Result<LocationsResponse, ApiError> {
        self.get_json(endpoints::AVAILABLE_LOCATIONS_PATH).await
    }

    /// Fetch the density thresholds available for one location.
    pub async fn fetch_densities(&self, location: &str) -> Result<DensitiesResponse, ApiError> {
        self.get_json(&endpoints::densities_path(location)).await
    }
}
