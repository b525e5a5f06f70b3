//! IPCA regional dashboard.
//!
//! Fetches the monthly price-index snapshot and the state boundaries once
//! at startup, installs them into the shared state, and renders the four
//! cross-linked views.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};

use ipca_chart_ui::charts::{BarChart, LineChart, MapChart, SunburstChart};
use ipca_chart_ui::components::{ChartCard, ErrorDisplay, FilterBar, KpiCards, LoadingSpinner};
use ipca_chart_ui::state::DashState;
use ipca_core::record::records_from_json;
use ipca_viz::color::theme;
use ipca_viz::geo::parse_feature_collection;

mod fetch;

const DATASET_URL: &str = "/api/ipca";
const BOUNDARIES_URL: &str = "/data/brazil-states.geojson";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting IPCA dashboard");
    launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(DashState::new);

    // One fetch per session; a failure blocks the dashboard.
    use_effect(move || {
        spawn(async move {
            info!("Fetching dataset and boundaries...");
            match load_snapshot().await {
                Ok((records, boundaries)) => {
                    info!("Loaded {} records", records.len());
                    state.set_snapshot(records);
                    state.boundaries.set(Some(boundaries));
                }
                Err(e) => {
                    error!("initial load failed: {e:#}");
                    state.error_msg.set(Some(format!("{e:#}")));
                }
            }
            state.loading.set(false);
        });
    });

    let shell_style = format!(
        "max-width: 1280px; margin: 0 auto; padding: 20px; font-family: sans-serif; background: {}; color: #e2e8f0; min-height: 100vh;",
        theme::BACKGROUND,
    );

    rsx! {
        div {
            style: "{shell_style}",

            header {
                style: "margin-bottom: 16px;",
                h1 {
                    style: "margin: 0; font-size: 22px;",
                    "IPCA por região"
                }
                p {
                    style: "margin: 4px 0 0 0; color: #94a3b8;",
                    "Variação mensal do índice de preços por região e grupo"
                }
            }

            if let Some(message) = (state.error_msg)() {
                ErrorDisplay { message }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                FilterBar {}
                KpiCards {}

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; align-items: start;",
                    ChartCard {
                        title: "Mapa regional".to_string(),
                        MapChart {}
                    }
                    ChartCard {
                        title: "Composição por região e mês".to_string(),
                        SunburstChart {}
                    }
                }

                ChartCard {
                    title: "Série histórica".to_string(),
                    LineChart {}
                }
                ChartCard {
                    title: "Variação por grupo".to_string(),
                    BarChart {}
                }
            }
        }
    }
}

/// Fetch and parse both startup payloads.
async fn load_snapshot() -> anyhow::Result<(
    Vec<ipca_core::record::IndexRecord>,
    ipca_viz::geo::FeatureCollection,
)> {
    let body = fetch::fetch_text(DATASET_URL).await?;
    let records = records_from_json(&body)?;

    let geojson = fetch::fetch_text(BOUNDARIES_URL).await?;
    let boundaries = parse_feature_collection(&geojson)?;

    Ok((records, boundaries))
}
