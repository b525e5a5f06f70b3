//! Shared Dioxus state and components for the IPCA dashboard.
//!
//! This crate provides:
//! - `state`: reactive `DashState` with Dioxus Signals (the single
//!   SelectionState; map clicks and filter controls mutate it, every chart
//!   re-derives from it)
//! - `tooltip`: a per-chart tooltip overlay with an explicit
//!   show/move/hide API
//! - `components`: reusable RSX components (filter bar, KPI cards, cards,
//!   error/loading states)
//! - `charts`: the thin adapters reconciling `ipca-viz` scenes into SVG

pub mod charts;
pub mod components;
pub mod state;
pub mod tooltip;
