//! Year/month filter controls.
//!
//! Changing either select mutates exactly that one field of the shared
//! state; everything downstream re-derives.

use crate::state::DashState;
use dioxus::prelude::*;
use ipca_core::month::month_name;
use ipca_data::aggregate::{available_months, available_years};

const SELECT_STYLE: &str = "background: #1e293b; color: #e2e8f0; border: 1px solid #334155; border-radius: 6px; padding: 4px 8px;";

/// Year and month dropdowns over the snapshot's available values.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<DashState>();
    let records = state.records.read();
    let years = available_years(&records);
    let months = available_months(&records);
    let selected_year = (state.year)();
    let selected_month = (state.month)();

    let on_year_change = move |evt: Event<FormData>| {
        state.set_year(evt.value().parse::<i32>().ok());
    };
    let on_month_change = move |evt: Event<FormData>| {
        state.set_month(evt.value().parse::<u32>().ok());
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center;",
            select {
                style: SELECT_STYLE,
                value: selected_year.map(|y| y.to_string()).unwrap_or_default(),
                onchange: on_year_change,
                for year in years {
                    option { value: "{year}", "{year}" }
                }
            }
            select {
                style: SELECT_STYLE,
                value: selected_month.map(|m| m.to_string()).unwrap_or_default(),
                onchange: on_month_change,
                for month in months {
                    option {
                        value: "{month}",
                        {month_name(month).unwrap_or("?")}
                    }
                }
            }
        }
    }
}
