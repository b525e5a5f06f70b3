//! Reusable Dioxus RSX components for the dashboard shell.

mod chart_card;
mod error_display;
mod filter_bar;
mod kpi_cards;
mod loading_spinner;

pub use chart_card::ChartCard;
pub use error_display::ErrorDisplay;
pub use filter_bar::FilterBar;
pub use kpi_cards::KpiCards;
pub use loading_spinner::LoadingSpinner;
