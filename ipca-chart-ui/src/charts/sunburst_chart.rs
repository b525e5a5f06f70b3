//! Sunburst component over the region → month hierarchy.
//!
//! Hovering an arc shows its ancestor trail in the tooltip and mirrors the
//! hovered name/value in the center text, like the reference chart.

use crate::state::DashState;
use crate::tooltip::{Tooltip, TooltipOverlay};
use dioxus::prelude::*;
use ipca_viz::sunburst::build_sunburst_scene;

#[component]
pub fn SunburstChart() -> Element {
    let state = use_context::<DashState>();
    let mut tooltip = use_hook(Tooltip::new);
    let mut hovered: Signal<Option<(String, Option<f64>)>> = use_signal(|| None);

    let records = state.records.read();
    let selection = state.selection();
    let filtered = selection.filter(&records);
    let scene = build_sunburst_scene(&filtered);

    let center_label = scene.center_label.clone();
    let (center_title, center_value) = match hovered() {
        Some((name, Some(v))) => (name, format!("Valor: {v:.2}")),
        Some((name, None)) => (name, "sem dado".to_string()),
        None => (center_label, String::new()),
    };

    let half = scene.size / 2.0;
    let arcs = scene.arcs.into_iter().map(|arc| {
        let name = arc.name.clone();
        let trail = arc.trail.clone();
        let value = arc.value;
        rsx! {
            path {
                d: "{arc.path}",
                fill: "{arc.fill}",
                stroke: "#020617",
                stroke_width: "0.5",
                onmouseenter: move |evt: Event<MouseData>| {
                    hovered.set(Some((name.clone(), value)));
                    let content = match value {
                        Some(v) => format!("{trail}\nValor: {v:.2}"),
                        None => format!("{trail}\nsem dado"),
                    };
                    let point = evt.client_coordinates();
                    tooltip.show(content, point.x, point.y);
                },
                onmousemove: move |evt: Event<MouseData>| {
                    let point = evt.client_coordinates();
                    tooltip.move_to(point.x, point.y);
                },
                onmouseleave: move |_| {
                    hovered.set(None);
                    tooltip.hide();
                },
            }
        }
    });

    rsx! {
        div {
            style: "position: relative;",
            svg {
                view_box: "{-half} {-half} {scene.size} {scene.size}",
                style: "width: 100%; height: auto; display: block; font: 12px sans-serif;",
                {arcs}
                text {
                    text_anchor: "middle",
                    dy: "-0.2em",
                    fill: "#e2e8f0",
                    font_size: "14",
                    font_weight: "bold",
                    "{center_title}"
                }
                text {
                    text_anchor: "middle",
                    dy: "1em",
                    fill: "#94a3b8",
                    font_size: "12",
                    "{center_value}"
                }
            }
            TooltipOverlay { tooltip }
        }
    }
}
