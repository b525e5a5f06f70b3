//! Application state managed via Dioxus context.
//!
//! `DashState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<DashState>()`. The year/month/region fields are the
//! dashboard's one shared mutable value: every mutation re-derives all
//! dependent scenes in full, there is no incremental diffing.

use dioxus::prelude::*;
use ipca_core::normalize::normalize;
use ipca_core::record::IndexRecord;
use ipca_data::select::Selection;
use ipca_viz::geo::FeatureCollection;

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct DashState {
    /// The record snapshot; read-only after the fetch completes.
    pub records: Signal<Vec<IndexRecord>>,
    /// Geographic boundaries for the map (None until loaded).
    pub boundaries: Signal<Option<FeatureCollection>>,
    /// Whether the initial fetch is still in flight; gates all rendering.
    pub loading: Signal<bool>,
    /// Fetch-failure message; blocks the dashboard entirely.
    pub error_msg: Signal<Option<String>>,
    /// Year filter (None = all years).
    pub year: Signal<Option<i32>>,
    /// Month filter (None = all months).
    pub month: Signal<Option<u32>>,
    /// Selected region key, set by map clicks (None = national scope).
    pub region: Signal<Option<String>>,
}

impl DashState {
    pub fn new() -> Self {
        Self {
            records: Signal::new(Vec::new()),
            boundaries: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            year: Signal::new(None),
            month: Signal::new(None),
            region: Signal::new(None),
        }
    }

    /// Current selection tuple as the plain value type the scene builders
    /// consume.
    pub fn selection(&self) -> Selection {
        Selection {
            year: (self.year)(),
            month: (self.month)(),
            region: (self.region)(),
        }
    }

    /// Install the fetched snapshot and reset the filters to their
    /// defaults: most recent available year and month, no region.
    pub fn set_snapshot(&mut self, records: Vec<IndexRecord>) {
        let defaults = Selection::default_for(&records);
        self.records.set(records);
        self.year.set(defaults.year);
        self.month.set(defaults.month);
        self.region.set(defaults.region);
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year.set(year);
    }

    pub fn set_month(&mut self, month: Option<u32>) {
        self.month.set(month);
    }

    /// Map-click mutation: select the clicked region, or clear the
    /// selection when the currently selected region is clicked again.
    pub fn select_region(&mut self, key: &str) {
        let next = toggle_region((self.region)().as_deref(), key);
        self.region.set(next);
    }
}

impl Default for DashState {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-clicking the selected region deselects it; any other click
/// overwrites the selection.
fn toggle_region(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(selected) if normalize(selected) == normalize(clicked) => None,
        _ => Some(clicked.to_string()),
    }
}
