//! India Forest Monitoring Dashboard
//!
//! Single-page dashboard over precomputed Global Forest Watch statistics for
//! Indian states and districts, rendered as D3.js charts with an optional
//! LLM-backed analysis chat.
//!
//! Data flow:
//! 1. On mount: initialize the D3 chart scripts and fetch the district
//!    catalog (the state catalog is compiled in).
//! 2. On selection change: fetch the record for (type, location, density).
//!    Requests are token-gated so a stale response never overwrites a newer
//!    one.
//! 3. On success: render the emissions line chart and the tree-loss bar
//!    chart, then ask the analysis backend for a narrative that seeds the
//!    chat widget. Analysis failures are logged and swallowed.

use dioxus::prelude::*;
use forest_api::{AnalysisClient, ForestApiClient};
use forest_chart_ui::components::{
    ChartContainer, ChartHeader, ChatWidget, DensitySelector, ErrorDisplay, LoadingSpinner,
    LocationDropdown, LocationTypeSelector, StatsGrid, SummaryCards,
};
use forest_chart_ui::js_bridge;
use forest_chart_ui::{AppState, Theme};
use forest_core::ChartSeries;

/// DOM ids for the D3 chart container divs.
const EMISSIONS_CHART_ID: &str = "emissions-chart";
const TREE_LOSS_CHART_ID: &str = "tree-loss-chart";

/// Build-time configuration. The dashboard shipped as several near-identical
/// variants (dark/light, with and without the chat widget); they collapse
/// into this one parameterized component.
#[derive(Clone)]
struct DashboardConfig {
    theme: Theme,
    chat_enabled: bool,
    upstream_base: String,
    analysis_base: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            theme: Theme::Dark,
            chat_enabled: true,
            upstream_base: forest_api::endpoints::UPSTREAM_BASE.to_string(),
            analysis_base: forest_api::endpoints::ANALYSIS_BASE.to_string(),
        }
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("forest-dashboard-root"))
        .launch(App);
}

/// Run one fetch for the current selection through the token-gated session.
///
/// Only the latest issued request may write the record, the error banner or
/// the loading flag; the chat is seeded only when this request's record was
/// actually applied.
async fn run_fetch(
    mut state: AppState,
    api: ForestApiClient,
    analysis: AnalysisClient,
    chat_enabled: bool,
) {
    let Some((token, selection)) = state.session.write().begin_fetch() else {
        return;
    };

    match api.fetch_forest_data(&selection).await {
        Ok(record) => {
            let applied = state.session.write().apply_success(token, record.clone());
            state.session.write().finish(token);

            if applied && chat_enabled {
                match analysis.analyze(&record).await {
                    Ok(narrative) => {
                        // The analyze round trip is a second suspension
                        // point; a newer fetch may have applied meanwhile,
                        // and its chat session must not be reseeded with
                        // this one's narrative.
                        if state.session.peek().is_current(token) {
                            state.chat.write().seed(&narrative);
                            state.show_chat.set(true);
                        }
                    }
                    // Best-effort enrichment: the dashboard stays usable
                    // without the analysis backend.
                    Err(err) => log::warn!("analysis backend unavailable: {}", err),
                }
            }
        }
        Err(err) => {
            log::error!("forest data fetch failed: {}", err);
            state.session.write().apply_failure(token);
            state.session.write().finish(token);
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(DashboardConfig::default);
    let mut state = use_context_provider(|| AppState::with_theme(config.theme));
    let api = use_hook(|| ForestApiClient::new(config.upstream_base.clone()));
    let analysis = use_hook(|| AnalysisClient::new(config.analysis_base.clone()));
    let chat_enabled = config.chat_enabled;
    let theme = (state.theme)();

    // ─── Effect 1: One-time init: chart scripts + district catalog ───
    let catalog_api = api.clone();
    use_effect(move || {
        js_bridge::init_charts();

        let api = catalog_api.clone();
        spawn(async move {
            match api.fetch_available_locations().await {
                Ok(locations) => {
                    state.session.write().filter.set_districts(locations.districts);
                }
                Err(err) => {
                    log::warn!("district catalog unavailable: {}", err);
                    state.session.write().filter.set_districts(Vec::new());
                }
            }
        });
    });

    // ─── Effect 2: Fetch on selection change ───
    // The memo is PartialEq-gated on the (type, location, density) triple, so
    // unrelated session writes (typing in the search box, the loading flag)
    // do not re-issue the request.
    let selection = use_memo(move || state.session.read().filter.selection());
    let fetch_api = api.clone();
    let fetch_analysis = analysis.clone();
    use_effect(move || {
        if selection().is_none() {
            return;
        }
        let api = fetch_api.clone();
        let analysis = fetch_analysis.clone();
        spawn(async move {
            run_fetch(state, api, analysis, chat_enabled).await;
        });
    });

    // ─── Effect 3: Render charts whenever the displayed record changes ───
    let record_memo = use_memo(move || state.session.read().record().cloned());
    use_effect(move || {
        let Some(record) = record_memo() else {
            js_bridge::destroy_chart(EMISSIONS_CHART_ID);
            js_bridge::destroy_chart(TREE_LOSS_CHART_ID);
            return;
        };
        let theme = *state.theme.peek();
        let text_color = theme.muted_color();
        let grid_color = match theme {
            Theme::Dark => "#374151",
            Theme::Light => "#e5e7eb",
        };

        let emissions = ChartSeries::from_year_series(&record.yearly_data.emissions);
        if emissions.is_empty() {
            js_bridge::destroy_chart(EMISSIONS_CHART_ID);
        } else {
            let data_json = serde_json::to_string(&emissions).unwrap_or_default();
            let config_json = serde_json::json!({
                "yAxisLabel": "Emissions (Mg CO₂e)",
                "xAxisLabel": "Year",
                "lineColor": "rgb(255, 99, 132)",
                "textColor": text_color,
                "gridColor": grid_color,
            })
            .to_string();
            js_bridge::render_line_chart(EMISSIONS_CHART_ID, &data_json, &config_json);
        }

        let tree_loss = ChartSeries::from_year_series(&record.yearly_data.tree_loss);
        if tree_loss.is_empty() {
            js_bridge::destroy_chart(TREE_LOSS_CHART_ID);
        } else {
            let data_json = serde_json::to_string(&tree_loss).unwrap_or_default();
            let config_json = serde_json::json!({
                "yAxisLabel": "Area (hectares)",
                "xAxisLabel": "Year",
                "barColor": "rgba(147, 51, 234, 0.7)",
                "textColor": text_color,
                "gridColor": grid_color,
            })
            .to_string();
            js_bridge::render_bar_chart(TREE_LOSS_CHART_ID, &data_json, &config_json);
        }
    });

    // Manual refetch for the same selection (e.g. after a transient failure).
    let refetch_api = api.clone();
    let refetch_analysis = analysis.clone();
    let on_fetch = move |_| {
        let api = refetch_api.clone();
        let analysis = refetch_analysis.clone();
        spawn(async move {
            run_fetch(state, api, analysis, chat_enabled).await;
        });
    };

    // Relay one chat message with the displayed record as context. The
    // user's message is appended optimistically; failures append the fixed
    // fallback apology instead of an error banner.
    let chat_client = analysis.clone();
    let on_chat_send = move |text: String| {
        let Some(record) = state.session.peek().record().cloned() else {
            return;
        };
        if state.chat.write().push_user(&text).is_none() {
            return;
        }
        let analysis = chat_client.clone();
        spawn(async move {
            match analysis.chat(&text, &record).await {
                Ok(reply) => state.chat.write().apply_reply(&reply),
                Err(err) => {
                    log::warn!("chat backend unavailable: {}", err);
                    state.chat.write().apply_failure();
                }
            }
        });
    };

    let session = state.session.read();
    let loading = session.loading();
    let error = session.error().map(str::to_string);
    let record = session.record().cloned();
    let has_selection = session.filter.selection().is_some();
    drop(session);

    let show_chat = (state.show_chat)();
    let chat_seeded = state.chat.read().is_seeded();

    rsx! {
        div {
            style: "{theme.page_style()}",
            div {
                style: "max-width: 1100px; margin: 0 auto;",

                h1 {
                    style: "margin: 0 0 4px 0; font-size: 26px; color: {theme.accent_color()};",
                    "India Forest Monitoring Dashboard"
                }
                p {
                    style: "margin: 0 0 24px 0; font-size: 13px; color: {theme.muted_color()};",
                    "Tree cover, carbon and emissions statistics from Global Forest Watch"
                }

                // ─── Filter form ───
                div {
                    style: "{theme.card_style()} margin-bottom: 24px;",
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; align-items: end;",
                        LocationTypeSelector {}
                        LocationDropdown {}
                        DensitySelector {}
                        button {
                            r#type: "button",
                            disabled: loading || !has_selection,
                            style: "padding: 9px 16px; border: none; border-radius: 6px; background: {theme.accent_color()}; color: #ffffff; cursor: pointer; font-weight: 600;",
                            onclick: on_fetch,
                            if loading { "Loading..." } else { "Fetch Data" }
                        }
                    }
                }

                if let Some(message) = error {
                    ErrorDisplay { message }
                }

                if loading {
                    LoadingSpinner {}
                }

                if let Some(record) = record {
                    div {
                        style: "display: flex; flex-direction: column; gap: 24px;",

                        SummaryCards { record: record.clone() }

                        div {
                            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;",
                            div {
                                style: "{theme.card_style()}",
                                ChartHeader {
                                    title: "CO₂ Emissions Over Time".to_string(),
                                    unit_description: "Mg CO₂e (megagrams of CO₂ equivalent)".to_string(),
                                }
                                ChartContainer { id: EMISSIONS_CHART_ID.to_string() }
                            }
                            div {
                                style: "{theme.card_style()}",
                                ChartHeader {
                                    title: "Tree Cover Loss by Year".to_string(),
                                    unit_description: "hectares".to_string(),
                                }
                                ChartContainer { id: TREE_LOSS_CHART_ID.to_string() }
                            }
                        }

                        StatsGrid { record }
                    }
                }

                if chat_enabled && chat_seeded && !show_chat {
                    button {
                        style: "position: fixed; bottom: 24px; right: 24px; width: 52px; height: 52px; border: none; border-radius: 50%; background: {theme.accent_color()}; color: #ffffff; font-size: 20px; cursor: pointer; z-index: 50;",
                        onclick: move |_| state.show_chat.set(true),
                        "?"
                    }
                }

                if chat_enabled && show_chat {
                    ChatWidget {
                        on_send: on_chat_send,
                        on_close: move |_| state.show_chat.set(false),
                    }
                }
            }
        }
    }
}
