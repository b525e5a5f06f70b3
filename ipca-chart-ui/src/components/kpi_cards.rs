//! KPI cards: last, maximum, and minimum value of the national headline
//! series.

use crate::state::DashState;
use dioxus::prelude::*;
use ipca_data::series::{national_series, summarize};

const CARD_STYLE: &str = "flex: 1; background: #0f172a; border: 1px solid #1e293b; border-radius: 12px; padding: 12px 16px; text-align: center;";

#[component]
pub fn KpiCards() -> Element {
    let state = use_context::<DashState>();
    let records = state.records.read();
    let summary = summarize(&national_series(&records));

    let fmt = |v: Option<f64>| match v {
        Some(v) => format!("{v:.2}%"),
        None => "—".to_string(),
    };
    let last = fmt(summary.map(|s| s.last));
    let max = fmt(summary.map(|s| s.max));
    let min = fmt(summary.map(|s| s.min));

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 8px 0;",
            Kpi { label: "Último valor".to_string(), value: last }
            Kpi { label: "Máximo".to_string(), value: max }
            Kpi { label: "Mínimo".to_string(), value: min }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct KpiProps {
    label: String,
    value: String,
}

#[component]
fn Kpi(props: KpiProps) -> Element {
    rsx! {
        div {
            style: CARD_STYLE,
            span {
                style: "display: block; font-size: 12px; color: #94a3b8;",
                "{props.label}"
            }
            strong {
                style: "font-size: 20px; color: #e2e8f0;",
                "{props.value}"
            }
        }
    }
}
