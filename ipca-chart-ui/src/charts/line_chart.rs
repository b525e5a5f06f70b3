//! Time-series line component: national baseline plus the selected
//! region's series.

use crate::charts::axis::{XAxis, YAxis};
use crate::state::DashState;
use crate::tooltip::{Tooltip, TooltipOverlay};
use dioxus::prelude::*;
use ipca_viz::line::build_line_scene;

#[component]
pub fn LineChart() -> Element {
    let state = use_context::<DashState>();
    let mut tooltip = use_hook(Tooltip::new);

    let records = state.records.read();
    let selection = state.selection();
    let scene = build_line_scene(&records, &selection);

    let lines = scene.lines.into_iter().map(|line| {
        rsx! {
            path {
                d: "{line.path}",
                fill: "none",
                stroke: "{line.color}",
                stroke_width: "2",
            }
        }
    });

    let markers = scene.markers.into_iter().map(|marker| {
        let date_key = marker.date_key.clone();
        let value = marker.value;
        rsx! {
            circle {
                cx: "{marker.x}",
                cy: "{marker.y}",
                r: "3",
                fill: "{marker.color}",
                onmouseenter: move |evt: Event<MouseData>| {
                    let point = evt.client_coordinates();
                    tooltip.show(format!("{date_key}\n{value:.2}%"), point.x, point.y);
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
                {lines}
                {markers}
            }
            TooltipOverlay { tooltip }
        }
    }
}
