//! Choropleth map component.
//!
//! Clicking a resolvable boundary selects its region (re-clicking clears
//! it); unresolvable boundaries take no part in hover or selection.

use crate::state::DashState;
use crate::tooltip::{Tooltip, TooltipOverlay};
use dioxus::prelude::*;
use ipca_viz::map::build_map_scene;

#[component]
pub fn MapChart() -> Element {
    let mut state = use_context::<DashState>();
    let mut tooltip = use_hook(Tooltip::new);

    let records = state.records.read();
    let boundaries_ref = state.boundaries.read();
    let Some(boundaries) = boundaries_ref.as_ref() else {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center; color: #94a3b8;",
                "Sem mapa disponível"
            }
        };
    };

    let selection = state.selection();
    let filtered = selection.filter(&records);
    let scene = build_map_scene(boundaries, &filtered, &selection);

    let shapes = scene.shapes.into_iter().map(|shape| {
        let label = shape.label.clone();
        let value = shape.value;
        let region_key = shape.region_key.clone();
        let hover_key = shape.region_key.clone();
        let cursor = if shape.region_key.is_some() {
            "pointer"
        } else {
            "default"
        };
        rsx! {
            path {
                d: "{shape.path}",
                fill: "{shape.fill}",
                stroke: "{shape.stroke}",
                stroke_width: "{shape.stroke_width}",
                style: "cursor: {cursor};",
                onmouseenter: move |evt: Event<MouseData>| {
                    // hover is only meaningful for covered boundaries
                    if hover_key.is_none() {
                        return;
                    }
                    let content = match value {
                        Some(v) => format!("{label}\n{v:.2}%"),
                        None => format!("{label}\nsem dado"),
                    };
                    let point = evt.client_coordinates();
                    tooltip.show(content, point.x, point.y);
                },
                onmousemove: move |evt: Event<MouseData>| {
                    let point = evt.client_coordinates();
                    tooltip.move_to(point.x, point.y);
                },
                onmouseleave: move |_| tooltip.hide(),
                onclick: move |_| {
                    // clicks on unresolvable boundaries are a no-op
                    if let Some(key) = &region_key {
                        state.select_region(key);
                    }
                },
            }
        }
    });

    let legend_stops = scene.legend.stops.clone();
    let legend_x = scene.width - 220.0;
    let legend_y = scene.height - 40.0;

    rsx! {
        div {
            style: "position: relative;",
            svg {
                view_box: "0 0 {scene.width} {scene.height}",
                style: "width: 100%; height: auto; display: block;",
                {shapes}
                defs {
                    linearGradient {
                        id: "map-legend-gradient",
                        x1: "0%",
                        x2: "100%",
                        for (offset, color) in legend_stops {
                            stop {
                                offset: "{offset * 100.0}%",
                                stop_color: "{color}",
                            }
                        }
                    }
                }
                g {
                    transform: "translate({legend_x},{legend_y})",
                    rect {
                        width: "200",
                        height: "12",
                        rx: "6",
                        fill: "url(#map-legend-gradient)",
                    }
                    text {
                        x: "0",
                        y: "-5",
                        fill: "#e0e0e0",
                        font_size: "12",
                        "{scene.legend.low_label}"
                    }
                    text {
                        x: "200",
                        y: "-5",
                        fill: "#e0e0e0",
                        font_size: "12",
                        text_anchor: "end",
                        "{scene.legend.high_label}"
                    }
                }
            }
            TooltipOverlay { tooltip }
        }
    }
}
