//! Axis rendering shared by the line and bar charts.

use dioxus::prelude::*;
use ipca_viz::color::theme;
use ipca_viz::scene::Axis;

const TICK_LENGTH: f64 = 6.0;

/// Horizontal (bottom) axis: a baseline with rotated tick labels below it.
#[component]
pub fn XAxis(axis: Axis) -> Element {
    rsx! {
        g {
            line {
                x1: "{axis.start}",
                y1: "{axis.offset}",
                x2: "{axis.end}",
                y2: "{axis.offset}",
                stroke: theme::AXIS,
            }
            for tick in axis.ticks {
                line {
                    x1: "{tick.pos}",
                    y1: "{axis.offset}",
                    x2: "{tick.pos}",
                    y2: "{axis.offset + TICK_LENGTH}",
                    stroke: theme::AXIS,
                }
                text {
                    x: "{tick.pos}",
                    y: "{axis.offset + TICK_LENGTH + 4.0}",
                    fill: theme::AXIS,
                    font_size: "10",
                    text_anchor: "end",
                    transform: "rotate(-35 {tick.pos} {axis.offset + TICK_LENGTH + 4.0})",
                    "{tick.label}"
                }
            }
        }
    }
}

/// Vertical (left) axis with right-aligned tick labels.
#[component]
pub fn YAxis(axis: Axis) -> Element {
    rsx! {
        g {
            line {
                x1: "{axis.offset}",
                y1: "{axis.start}",
                x2: "{axis.offset}",
                y2: "{axis.end}",
                stroke: theme::AXIS,
            }
            for tick in axis.ticks {
                line {
                    x1: "{axis.offset - TICK_LENGTH}",
                    y1: "{tick.pos}",
                    x2: "{axis.offset}",
                    y2: "{tick.pos}",
                    stroke: theme::AXIS,
                }
                text {
                    x: "{axis.offset - TICK_LENGTH - 2.0}",
                    y: "{tick.pos + 3.0}",
                    fill: theme::AXIS,
                    font_size: "10",
                    text_anchor: "end",
                    "{tick.label}"
                }
            }
        }
    }
}
