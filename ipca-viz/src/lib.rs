//! Visualization-layout engine for the IPCA dashboard.
//!
//! Everything in this crate is pure: scene builders map (derived data,
//! scales, selection) to declarative scene structs, and a thin UI adapter
//! reconciles those against the output surface. No module here touches the
//! DOM or holds render state.

pub mod bar;
pub mod color;
pub mod geo;
pub mod hierarchy;
pub mod line;
pub mod map;
pub mod scale;
pub mod scene;
pub mod sunburst;
