//! Choropleth map scene.
//!
//! One shape per boundary. Resolvable boundaries with a value are filled
//! from the diverging deviation scale; everything else gets the neutral
//! no-data fill and is excluded from selection (its `region_key` is None).

use crate::color::{theme, DivergingScale};
use crate::geo::{feature_path, resolve_boundary, FeatureCollection, Projection};
use ipca_core::normalize::normalize;
use ipca_data::aggregate::{aggregate_by, Reduce};
use ipca_data::select::Selection;
use ipca_core::record::IndexRecord;
use serde::Serialize;
use std::collections::HashMap;

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 600.0;

/// Emphasized stroke width for the selected region.
const SELECTED_STROKE_WIDTH: f64 = 2.5;
const STROKE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapShape {
    pub path: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Dataset region key; None for unresolvable boundaries, which are
    /// not selectable.
    pub region_key: Option<String>,
    /// Hover label: the dataset key when resolvable, else the boundary name.
    pub label: String,
    /// Aggregated value behind the fill; None renders a "no data" tooltip.
    pub value: Option<f64>,
}

/// Legend gradient description: color stops at offsets in [0, 1] plus the
/// low/high captions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLegend {
    pub stops: Vec<(f64, String)>,
    pub low_label: String,
    pub high_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<MapShape>,
    pub legend: MapLegend,
}

/// Build the map scene from the year/month-filtered records.
pub fn build_map_scene(
    boundaries: &FeatureCollection,
    filtered: &[&IndexRecord],
    selection: &Selection,
) -> MapScene {
    let projection = Projection::fit(MAP_WIDTH, MAP_HEIGHT, boundaries);
    let color = DivergingScale::choropleth();

    // Headline variation per region, keyed by normalized region label.
    let regional: Vec<&IndexRecord> = filtered
        .iter()
        .copied()
        .filter(|r| r.is_headline_group() && !r.is_national_region())
        .collect();
    let values: HashMap<String, Option<f64>> =
        aggregate_by(&regional, |r| normalize(&r.regiao), Reduce::Mean)
            .into_iter()
            .collect();

    let selected_key = selection.region.as_deref().map(normalize);

    let shapes = boundaries
        .features
        .iter()
        .map(|feature| {
            let boundary_name = feature.properties.name.clone().unwrap_or_default();
            let resolved = resolve_boundary(&boundary_name);
            if resolved.is_none() {
                log::debug!("boundary {boundary_name:?} has no dataset region");
            }
            let value = resolved
                .and_then(|key| values.get(&normalize(key)))
                .copied()
                .flatten();

            let fill = match value {
                Some(v) => color.color(v),
                None => theme::NO_DATA_FILL.to_string(),
            };
            let is_selected = match (&selected_key, resolved) {
                (Some(selected), Some(key)) => *selected == normalize(key),
                _ => false,
            };
            let (stroke, stroke_width) = if is_selected {
                (theme::BRAZIL_BLUE.to_string(), SELECTED_STROKE_WIDTH)
            } else {
                (theme::BACKGROUND.to_string(), STROKE_WIDTH)
            };

            MapShape {
                path: feature_path(feature, &projection),
                fill,
                stroke,
                stroke_width,
                region_key: resolved.map(str::to_string),
                label: resolved.map(str::to_string).unwrap_or(boundary_name),
                value,
            }
        })
        .collect();

    let legend_stops = (0..=4)
        .map(|i| {
            let t = i as f64 / 4.0;
            // fixed deviation domain [-2, 2]
            (t, color.color(-2.0 + 4.0 * t))
        })
        .collect();

    MapScene {
        width: MAP_WIDTH,
        height: MAP_HEIGHT,
        shapes,
        legend: MapLegend {
            stops: legend_stops,
            low_label: "Queda".to_string(),
            high_label: "Alta".to_string(),
        },
    }
}
