//! Sunburst scene: the region → month hierarchy under a partition layout.
//!
//! Each region subtree gets a distinct hue from the fixed categorical
//! palette; month leaves inherit their parent's hue so leaf coloring still
//! reads as the region grouping.

use crate::color::categorical;
use crate::hierarchy::{build_hierarchy, partition, PartitionCell};
use ipca_core::record::IndexRecord;
use serde::Serialize;
use std::f64::consts::{PI, TAU};

pub const SUNBURST_SIZE: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstArc {
    /// Annular-sector SVG path, centered on the origin.
    pub path: String,
    pub fill: String,
    pub name: String,
    /// Ancestor breadcrumb, e.g. "IPCA / Salvador (BA) / Março".
    pub trail: String,
    /// Aggregated value; None is a no-data leaf.
    pub value: Option<f64>,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstScene {
    /// Width and height of the square frame; arcs are relative to its center.
    pub size: f64,
    pub arcs: Vec<SunburstArc>,
    pub center_label: String,
}

/// Build the sunburst scene from the year-filtered records.
pub fn build_sunburst_scene(filtered: &[&IndexRecord]) -> SunburstScene {
    let root = build_hierarchy(filtered);
    let radius = SUNBURST_SIZE / 2.0;
    let cells = partition(&root, radius);

    // region hues follow the sorted region order of the hierarchy
    let region_order: Vec<String> = root.children.iter().map(|c| c.name.clone()).collect();
    let region_hue = |region: &str| {
        region_order
            .iter()
            .position(|name| name == region)
            .map(categorical)
            .unwrap_or("#ffffff")
    };

    let arcs = cells
        .iter()
        .filter(|cell| cell.depth > 0 && cell.x1 > cell.x0)
        .map(|cell| {
            // trail[1] is the region ancestor for both depths
            let region = cell.trail.get(1).map(String::as_str).unwrap_or_default();
            SunburstArc {
                path: arc_path(cell),
                fill: region_hue(region).to_string(),
                name: cell.name.clone(),
                trail: cell.trail.join(" / "),
                value: cell.value,
                depth: cell.depth,
            }
        })
        .collect();

    SunburstScene {
        size: SUNBURST_SIZE,
        arcs,
        center_label: root.name,
    }
}

/// Point on a circle of radius `r` at clock angle `a` (0 = twelve o'clock,
/// increasing clockwise).
fn clock_point(r: f64, a: f64) -> (f64, f64) {
    (r * a.sin(), -r * a.cos())
}

/// SVG path for one annular sector. A full-circle interval is drawn as two
/// half arcs, since a single SVG arc cannot span 2π.
fn arc_path(cell: &PartitionCell) -> String {
    let width = cell.x1 - cell.x0;
    if width >= TAU - 1e-9 {
        return full_annulus_path(cell.y0, cell.y1);
    }

    let large = if width > PI { 1 } else { 0 };
    let (ox0, oy0) = clock_point(cell.y1, cell.x0);
    let (ox1, oy1) = clock_point(cell.y1, cell.x1);
    let (ix1, iy1) = clock_point(cell.y0, cell.x1);
    let (ix0, iy0) = clock_point(cell.y0, cell.x0);
    format!(
        "M{ox0:.2},{oy0:.2}A{r1:.2},{r1:.2} 0 {large} 1 {ox1:.2},{oy1:.2}L{ix1:.2},{iy1:.2}A{r0:.2},{r0:.2} 0 {large} 0 {ix0:.2},{iy0:.2}Z",
        r1 = cell.y1,
        r0 = cell.y0,
    )
}

fn full_annulus_path(r0: f64, r1: f64) -> String {
    let outer = format!(
        "M0,{a:.2}A{r1:.2},{r1:.2} 0 1 1 0,{b:.2}A{r1:.2},{r1:.2} 0 1 1 0,{a:.2}Z",
        a = -r1,
        b = r1,
    );
    if r0 <= 0.0 {
        return outer;
    }
    // inner ring wound the opposite way cuts the hole
    format!(
        "{outer}M0,{a:.2}A{r0:.2},{r0:.2} 0 1 0 0,{b:.2}A{r0:.2},{r0:.2} 0 1 0 0,{a:.2}Z",
        a = -r0,
        b = r0,
    )
}
