//! Per-group bar component for the filtered month, scoped to the selected
//! region or to the national aggregate.

use crate::charts::axis::{XAxis, YAxis};
use crate::state::DashState;
use crate::tooltip::{Tooltip, TooltipOverlay};
use dioxus::prelude::*;
use ipca_viz::bar::build_bar_scene;

#[component]
pub fn BarChart() -> Element {
    let state = use_context::<DashState>();
    let mut tooltip = use_hook(Tooltip::new);

    let records = state.records.read();
    let selection = state.selection();
    let filtered = selection.filter(&records);
    let scene = build_bar_scene(&filtered, &selection);

    let bars = scene.bars.into_iter().map(|bar| {
        let label = bar.label.clone();
        let value = bar.value;
        rsx! {
            rect {
                x: "{bar.x}",
                y: "{bar.y}",
                width: "{bar.width}",
                height: "{bar.height}",
                fill: "{bar.fill}",
                onmouseenter: move |evt: Event<MouseData>| {
                    let point = evt.client_coordinates();
                    let body = match value {
                        Some(v) => format!("{label}\n{v:.2}%"),
                        None => format!("{label}\nsem dado"),
                    };
                    tooltip.show(body, point.x, point.y);
                },
                onmousemove: move |evt: Event<MouseData>| {
                    let point = evt.client_coordinates();
                    tooltip.move_to(point.x, point.y);
                },
                onmouseleave: move |_| tooltip.hide(),
            }
        }
    });

    rsx! {
        div {
            style: "position: relative;",
            svg {
                view_box: "0 0 {scene.width} {scene.height}",
                style: "width: 100%; height: auto; display: block;",
                XAxis { axis: scene.x_axis }
                YAxis { axis: scene.y_axis }
                {bars}
            }
            TooltipOverlay { tooltip }
        }
    }
}
