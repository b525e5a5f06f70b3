//! Grouped bar scene: mean variation per non-headline category for the
//! current scope (national, or the selected region).

use crate::color::theme;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Axis, Margin, Tick};
use ipca_core::normalize::normalize;
use ipca_core::record::{IndexRecord, NATIONAL_REGION};
use ipca_data::aggregate::{aggregate_by, Reduce};
use ipca_data::select::Selection;
use serde::Serialize;

pub const BAR_WIDTH: f64 = 800.0;
pub const BAR_HEIGHT: f64 = 360.0;
const MARGIN: Margin = Margin {
    top: 20.0,
    right: 20.0,
    bottom: 80.0,
    left: 60.0,
};
const BAND_PADDING: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMark {
    pub label: String,
    /// Aggregated mean; None is a no-data bucket rendered as a
    /// placeholder, never as a zero-height bar.
    pub value: Option<f64>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarScene {
    pub width: f64,
    pub height: f64,
    /// Pixel y of value zero; bars grow from here, placeholders sit on it.
    pub baseline_y: f64,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<BarMark>,
}

/// Build the bar scene from the year/month-filtered records.
pub fn build_bar_scene(filtered: &[&IndexRecord], selection: &Selection) -> BarScene {
    let scope_key = normalize(selection.region.as_deref().unwrap_or(NATIONAL_REGION));
    let fill = if selection.region.is_some() {
        theme::REGION_GREEN
    } else {
        theme::BRAZIL_BLUE
    };

    let scoped: Vec<&IndexRecord> = filtered
        .iter()
        .copied()
        .filter(|r| !r.is_headline_group() && normalize(&r.regiao) == scope_key)
        .collect();
    let buckets = aggregate_by(&scoped, |r| r.grupo.clone(), Reduce::Mean);

    let labels: Vec<String> = buckets.iter().map(|(label, _)| label.clone()).collect();
    let x = BandScale::new(labels, (MARGIN.left, BAR_WIDTH - MARGIN.right), BAND_PADDING);

    let values: Vec<f64> = buckets.iter().filter_map(|(_, v)| *v).collect();
    let (min, max) = values
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let y = LinearScale::new((min, max), (BAR_HEIGHT - MARGIN.bottom, MARGIN.top)).nice();
    let baseline_y = y.scale(0.0);

    let bars = buckets
        .iter()
        .filter_map(|(label, value)| {
            let bar_x = x.position(label)?;
            let mark = match value {
                Some(v) => {
                    let top = y.scale(v.max(0.0));
                    BarMark {
                        label: label.clone(),
                        value: Some(*v),
                        x: bar_x,
                        y: top,
                        width: x.bandwidth(),
                        height: (y.scale(*v) - baseline_y).abs(),
                        fill: fill.to_string(),
                    }
                }
                None => BarMark {
                    label: label.clone(),
                    value: None,
                    x: bar_x,
                    y: baseline_y,
                    width: x.bandwidth(),
                    height: 0.0,
                    fill: theme::NO_DATA_FILL.to_string(),
                },
            };
            Some(mark)
        })
        .collect();

    let x_axis = Axis {
        offset: baseline_y,
        start: MARGIN.left,
        end: BAR_WIDTH - MARGIN.right,
        ticks: x
            .domain()
            .iter()
            .filter_map(|label| {
                Some(Tick {
                    pos: x.position(label)? + x.bandwidth() / 2.0,
                    label: label.clone(),
                })
            })
            .collect(),
    };
    let y_axis = Axis {
        offset: MARGIN.left,
        start: MARGIN.top,
        end: BAR_HEIGHT - MARGIN.bottom,
        ticks: y
            .ticks(6)
            .into_iter()
            .map(|v| Tick {
                pos: y.scale(v),
                label: format!("{v:.2}"),
            })
            .collect(),
    };

    BarScene {
        width: BAR_WIDTH,
        height: BAR_HEIGHT,
        baseline_y,
        x_axis,
        y_axis,
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipca_core::record::records_from_json;

    fn snapshot() -> Vec<IndexRecord> {
        records_from_json(
            r#"[
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"Brasil","variacao":0.5},
            {"ano":2024,"mes":1,"grupo":"Alimentação","regiao":"Brasil","variacao":0.9},
            {"ano":2024,"mes":1,"grupo":"Transportes","regiao":"Brasil","variacao":-0.4},
            {"ano":2024,"mes":1,"grupo":"Alimentação","regiao":"São Paulo (SP)","variacao":0.2}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_national_scope_excludes_headline() {
        let records = snapshot();
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let scene = build_bar_scene(&refs, &Selection::default());
        let labels: Vec<&str> = scene.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Alimentação", "Transportes"]);
        assert!(scene.bars.iter().all(|b| b.fill == theme::BRAZIL_BLUE));
    }

    #[test]
    fn test_region_scope() {
        let records = snapshot();
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let selection = Selection {
            year: None,
            month: None,
            region: Some("São Paulo (SP)".to_string()),
        };
        let scene = build_bar_scene(&refs, &selection);
        assert_eq!(scene.bars.len(), 1);
        assert_eq!(scene.bars[0].value, Some(0.2));
        assert_eq!(scene.bars[0].fill, theme::REGION_GREEN);
    }

    #[test]
    fn test_negative_bar_hangs_below_baseline() {
        let records = snapshot();
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let scene = build_bar_scene(&refs, &Selection::default());
        let transportes = scene.bars.iter().find(|b| b.label == "Transportes").unwrap();
        assert!((transportes.y - scene.baseline_y).abs() < 1e-9);
        assert!(transportes.height > 0.0);
        let alimentacao = scene.bars.iter().find(|b| b.label == "Alimentação").unwrap();
        assert!(alimentacao.y < scene.baseline_y);
    }

    #[test]
    fn test_no_data_bucket_is_placeholder_not_zero_bar() {
        let records = records_from_json(
            r#"[
            {"ano":2024,"mes":1,"grupo":"Vestuário","regiao":"Brasil","variacao":"n/a"},
            {"ano":2024,"mes":1,"grupo":"Habitação","regiao":"Brasil","variacao":0.3}
        ]"#,
        )
        .unwrap();
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let scene = build_bar_scene(&refs, &Selection::default());
        let vestuario = scene.bars.iter().find(|b| b.label == "Vestuário").unwrap();
        assert_eq!(vestuario.value, None);
        assert_eq!(vestuario.height, 0.0);
        assert_eq!(vestuario.fill, theme::NO_DATA_FILL);
    }

    #[test]
    fn test_empty_scope_is_valid_empty_scene() {
        let scene = build_bar_scene(&[], &Selection::default());
        assert!(scene.bars.is_empty());
        assert!(scene.x_axis.ticks.is_empty());
        assert!(scene.baseline_y.is_finite());
    }
}
