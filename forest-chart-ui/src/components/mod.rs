//! Reusable Dioxus RSX components for the forest dashboard.

mod chart_container;
mod chart_header;
mod chat_widget;
mod density_selector;
mod error_display;
mod loading_spinner;
mod location_dropdown;
mod location_type_selector;
mod stats_grid;
mod summary_cards;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chat_widget::ChatWidget;
pub use density_selector::DensitySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_dropdown::LocationDropdown;
pub use location_type_selector::LocationTypeSelector;
pub use stats_grid::StatsGrid;
pub use summary_cards::SummaryCards;
