//! Stateless pass-through proxy for the forest statistics upstream.
//!
//! Five routes, each of which lower-cases the location name where present,
//! concatenates onto the upstream base URL, performs the call and relays the
//! JSON body verbatim. Any failure (transport, non-2xx, non-JSON body) maps
//! to HTTP 500 with a fixed per-route error object. No caching, no retry,
//! no validation beyond what the upstream enforces.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Production upstream serving the precomputed statistics.
pub const DEFAULT_UPSTREAM: &str = "https://tech-thrive.onrender.com";

/// Shared handler state: one HTTP client plus the upstream base URL.
#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    pub fn new(upstream: impl Into<String>) -> Self {
        ProxyState {
            http: reqwest::Client::new(),
            upstream: upstream.into(),
        }
    }
}

/// `/data/state/{lower}/{density}` for a state record.
pub fn state_data_url(upstream: &str, state: &str, density: &str) -> String {
    format!("{}/data/state/{}/{}", upstream, state.to_lowercase(), density)
}

/// District traffic is routed through the state endpoint family; the
/// upstream has no separate district route.
pub fn district_data_url(upstream: &str, district: &str, density: &str) -> String {
    state_data_url(upstream, district, density)
}

/// `/data/india/{density}` for the country-wide record.
pub fn india_data_url(upstream: &str, density: &str) -> String {
    format!("{}/data/india/{}", upstream, density)
}

pub fn available_locations_url(upstream: &str) -> String {
    format!("{}/data/available-locations", upstream)
}

pub fn densities_url(upstream: &str, location: &str) -> String {
    format!("{}/data/densities?location={}", upstream, location)
}

type RelayResult = Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)>;

async fn fetch_json(proxy: &ProxyState, url: &str) -> Result<serde_json::Value, reqwest::Error> {
    let response = proxy.http.get(url).send().await?.error_for_status()?;
    response.json().await
}

/// Relay one upstream body verbatim, or the fixed 500 error object.
async fn relay(proxy: &ProxyState, url: &str, error_message: &'static str) -> RelayResult {
    match fetch_json(proxy, url).await {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            warn!("upstream request failed ({}): {}", url, err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": error_message })),
            ))
        }
    }
}

async fn state_data(
    State(proxy): State<ProxyState>,
    Path((state, density)): Path<(String, String)>,
) -> RelayResult {
    let url = state_data_url(&proxy.upstream, &state, &density);
    relay(&proxy, &url, "Failed to fetch state data").await
}

async fn district_data(
    State(proxy): State<ProxyState>,
    Path((district, density)): Path<(String, String)>,
) -> RelayResult {
    let url = district_data_url(&proxy.upstream, &district, &density);
    relay(&proxy, &url, "Failed to fetch district data").await
}

async fn india_data(
    State(proxy): State<ProxyState>,
    Path(density): Path<String>,
) -> RelayResult {
    let url = india_data_url(&proxy.upstream, &density);
    relay(&proxy, &url, "Failed to fetch India data").await
}

async fn available_locations(State(proxy): State<ProxyState>) -> RelayResult {
    let url = available_locations_url(&proxy.upstream);
    relay(&proxy, &url, "Failed to fetch available locations").await
}

#[derive(Deserialize)]
struct DensitiesQuery {
    #[serde(default)]
    location: String,
}

async fn densities(
    State(proxy): State<ProxyState>,
    Query(query): Query<DensitiesQuery>,
) -> RelayResult {
    let url = densities_url(&proxy.upstream, &query.location);
    relay(&proxy, &url, "Failed to fetch densities").await
}

/// Build the proxy router: the five `/api` routes, CORS allow-all and
/// request tracing. With `serve_static`, a production build in `dist/` is
/// served with an SPA index fallback for client-side routes.
pub fn router(proxy: ProxyState, serve_static: bool) -> Router {
    let mut app = Router::new()
        .route("/api/state/:state/:density", get(state_data))
        .route("/api/district/:district/:density", get(district_data))
        .route("/api/india/:density", get(india_data))
        .route("/api/available-locations", get(available_locations))
        .route("/api/densities", get(densities))
        .with_state(proxy);

    if serve_static {
        let spa = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));
        app = app.fallback_service(spa);
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://tech-thrive.onrender.com";

    #[test]
    fn state_route_lowercases_the_name() {
        assert_eq!(
            state_data_url(BASE, "Kerala", "30"),
            "https://tech-thrive.onrender.com/data/state/kerala/30"
        );
    }

    #[test]
    fn district_route_reuses_the_state_endpoint_family() {
        assert_eq!(
            district_data_url(BASE, "Wayanad", "50"),
            "https://tech-thrive.onrender.com/data/state/wayanad/50"
        );
    }

    #[test]
    fn india_route_carries_only_the_density() {
        assert_eq!(
            india_data_url(BASE, "30"),
            "https://tech-thrive.onrender.com/data/india/30"
        );
    }

    #[test]
    fn catalog_and_density_routes() {
        assert_eq!(
            available_locations_url(BASE),
            "https://tech-thrive.onrender.com/data/available-locations"
        );
        assert_eq!(
            densities_url(BASE, "kerala"),
            "https://tech-thrive.onrender.com/data/densities?location=kerala"
        );
    }

    #[test]
    fn already_lowercase_names_pass_through_unchanged() {
        assert_eq!(
            state_data_url(BASE, "tamil nadu", "75"),
            "https://tech-thrive.onrender.com/data/state/tamil nadu/75"
        );
    }
}
