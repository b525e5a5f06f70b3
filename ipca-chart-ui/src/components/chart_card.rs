//! Card wrapper shared by every chart section.

use dioxus::prelude::*;
use ipca_viz::color::theme;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    pub title: String,
    pub children: Element,
}

/// A titled card holding one chart.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let style = format!(
        "background: #0f172a; border: 1px solid {border}; border-radius: 12px; padding: 16px; margin: 8px 0;",
        border = theme::TOOLTIP_BORDER,
    );
    rsx! {
        section {
            style: "{style}",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 16px; color: #e2e8f0;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
