//! Per-chart tooltip overlay.
//!
//! Each interactive chart owns one `Tooltip` handle, created in its own
//! hook scope and rendered by its own `TooltipOverlay`; the overlay is
//! torn down with the chart. Pointer handlers drive it through the
//! explicit show/move/hide API.

use dioxus::prelude::*;
use ipca_viz::color::theme;

#[derive(Clone, Copy, PartialEq)]
pub struct Tooltip {
    visible: Signal<bool>,
    content: Signal<String>,
    x: Signal<f64>,
    y: Signal<f64>,
}

/// Offset between the pointer and the overlay corner, in pixels.
const POINTER_OFFSET: f64 = 12.0;

impl Tooltip {
    pub fn new() -> Self {
        Self {
            visible: Signal::new(false),
            content: Signal::new(String::new()),
            x: Signal::new(0.0),
            y: Signal::new(0.0),
        }
    }

    pub fn show(&mut self, content: String, x: f64, y: f64) {
        self.content.set(content);
        self.x.set(x + POINTER_OFFSET);
        self.y.set(y + POINTER_OFFSET);
        self.visible.set(true);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x.set(x + POINTER_OFFSET);
        self.y.set(y + POINTER_OFFSET);
    }

    pub fn hide(&mut self) {
        self.visible.set(false);
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

/// The overlay element for one chart's tooltip.
#[component]
pub fn TooltipOverlay(tooltip: Tooltip) -> Element {
    let visible = (tooltip.visible)();
    let content = (tooltip.content)();
    let x = (tooltip.x)();
    let y = (tooltip.y)();

    let style = format!(
        "position: fixed; left: {x}px; top: {y}px; \
         background: {bg}; border: 1px solid {border}; border-radius: 8px; \
         padding: 6px 10px; font-size: 12px; color: #e5e7eb; \
         pointer-events: none; white-space: pre-line; \
         opacity: {opacity}; z-index: 10;",
        bg = theme::TOOLTIP_BG,
        border = theme::TOOLTIP_BORDER,
        opacity = if visible { 1.0 } else { 0.0 },
    );

    rsx! {
        div { style: "{style}", "{content}" }
    }
}
