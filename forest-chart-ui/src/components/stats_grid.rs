//! Additional statistics grid below the charts.

use crate::state::AppState;
use dioxus::prelude::*;
use forest_core::ForestRecord;

#[derive(Props, Clone, PartialEq)]
pub struct StatsGridProps {
    pub record: ForestRecord,
}

fn tile(theme: &crate::state::Theme, label: &str, value: &str) -> Element {
    rsx! {
        div {
            style: "{theme.card_style()}",
            h4 {
                style: "margin: 0; font-size: 13px; color: {theme.muted_color()};",
                "{label}"
            }
            p {
                style: "margin: 6px 0 0 0; font-size: 18px; font-weight: 600;",
                "{value}"
            }
        }
    }
}

/// Secondary statistics: carbon stocks, historical extents, gain, threshold.
/// Extent years render only when present in the payload.
#[component]
pub fn StatsGrid(props: StatsGridProps) -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let record = &props.record;

    let extent_2000 = record.stats.tree_cover_extent.get("2000").cloned();
    let extent_2010 = record.stats.tree_cover_extent.get("2010").cloned();
    let threshold = format!("{}%", record.density_threshold);

    rsx! {
        div {
            style: "{theme.card_style()}",
            h3 {
                style: "margin: 0 0 16px 0; font-size: 16px;",
                "Additional Statistics"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px;",
                {tile(&theme, "Carbon Stocks", &record.stats.carbon_stocks.formatted)}
                if let Some(extent) = extent_2000 {
                    {tile(&theme, "Tree Cover (2000)", &extent.formatted)}
                }
                if let Some(extent) = extent_2010 {
                    {tile(&theme, "Tree Cover (2010)", &extent.formatted)}
                }
                {tile(&theme, "Tree Cover Gain (2000-2020)", &record.stats.tree_cover_gain_2000_2020.formatted)}
                {tile(&theme, "Density Threshold", &threshold)}
            }
        }
    }
}
