//! Loading indicator shown while the initial fetch is in flight.

use dioxus::prelude::*;

/// Simple loading indicator; the dashboard renders nothing else until the
/// dataset and boundaries have arrived.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #94a3b8;",
            "Carregando…"
        }
    }
}
