//! Reusable Dioxus RSX components for the campaign dashboard.

mod budget_panel;
mod campaign_header;
mod chart_container;
mod error_display;
mod kpi_card;
mod loading_spinner;
mod performance_table;
mod timeline_panel;

pub use budget_panel::{channel_color, BudgetPanel};
pub use campaign_header::CampaignHeader;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use kpi_card::KpiCard;
pub use loading_spinner::LoadingSpinner;
pub use performance_table::PerformanceTable;
pub use timeline_panel::TimelinePanel;
