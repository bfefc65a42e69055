//! Summary cards for a fetched record: location, health, emissions, cover.

use crate::state::AppState;
use dioxus::prelude::*;
use forest_core::ForestRecord;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub record: ForestRecord,
}

/// The four headline cards. Every displayed number is the upstream's
/// pre-formatted string, passed through verbatim.
#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let record = &props.record;

    let health = &record.analysis.forest_health_status;
    let net_change = &record.analysis.net_forest_change;
    let percent = net_change.percent.unwrap_or(0.0);

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",

            div {
                style: "{theme.card_style()}",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 15px; color: {theme.muted_color()};",
                    "Location"
                }
                p {
                    style: "margin: 0; font-size: 22px; font-weight: bold; text-transform: capitalize;",
                    "{record.location}"
                }
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: {theme.muted_color()};",
                    "Type: {record.location_type}"
                }
            }

            div {
                style: "{theme.card_style()}",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 15px; color: {theme.muted_color()};",
                    "Forest Health"
                }
                p {
                    style: "margin: 0; font-size: 22px; font-weight: bold; color: {theme.health_color(health)};",
                    "{health}"
                }
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: {theme.muted_color()};",
                    "Net change: {net_change.formatted} ({percent}%)"
                }
            }

            div {
                style: "{theme.card_style()}",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 15px; color: {theme.muted_color()};",
                    "Total Emissions"
                }
                p {
                    style: "margin: 0; font-size: 22px; font-weight: bold;",
                    "{record.analysis.total_emissions.formatted}"
                }
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: {theme.muted_color()};",
                    "Carbon density: {record.stats.carbon_density.formatted}"
                }
            }

            div {
                style: "{theme.card_style()}",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 15px; color: {theme.muted_color()};",
                    "Tree Cover"
                }
                p {
                    style: "margin: 0; font-size: 22px; font-weight: bold;",
                    "{record.stats.tree_cover_area.formatted}"
                }
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: {theme.muted_color()};",
                    "Total loss: {record.analysis.total_loss.formatted}"
                }
            }
        }
    }
}
