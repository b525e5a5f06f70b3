//! Time-series line scene: the national headline baseline, plus the
//! selected region's series when one is selected.

use crate::color::theme;
use crate::scale::{LinearScale, PointScale};
use crate::scene::{Axis, Margin, Tick};
use ipca_core::record::IndexRecord;
use ipca_data::select::Selection;
use ipca_data::series::{national_series, region_series, SeriesPoint};
use serde::Serialize;
use std::collections::BTreeSet;

pub const LINE_WIDTH: f64 = 900.0;
pub const LINE_HEIGHT: f64 = 360.0;
const MARGIN: Margin = Margin {
    top: 20.0,
    right: 20.0,
    bottom: 40.0,
    left: 60.0,
};

/// Label every n-th date tick to keep the axis readable.
const X_TICK_STRIDE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePath {
    pub name: String,
    pub color: String,
    /// "M x,y L x,y ..." polyline path.
    pub path: String,
}

/// Circle hover target at one series sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineMarker {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub date_key: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineScene {
    pub width: f64,
    pub height: f64,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub lines: Vec<LinePath>,
    pub markers: Vec<LineMarker>,
}

/// Build the line scene over the full (unfiltered) snapshot; the line
/// chart always shows the whole history.
pub fn build_line_scene(records: &[IndexRecord], selection: &Selection) -> LineScene {
    let mut series: Vec<(String, String, Vec<SeriesPoint>)> = vec![(
        "Brasil".to_string(),
        theme::BRAZIL_BLUE.to_string(),
        national_series(records),
    )];
    if let Some(region) = &selection.region {
        series.push((
            region.clone(),
            theme::REGION_GREEN.to_string(),
            region_series(records, region),
        ));
    }

    let all: Vec<&SeriesPoint> = series.iter().flat_map(|(_, _, s)| s.iter()).collect();
    if all.is_empty() {
        return LineScene {
            width: LINE_WIDTH,
            height: LINE_HEIGHT,
            x_axis: Axis::empty(LINE_HEIGHT - MARGIN.bottom, MARGIN.left, LINE_WIDTH - MARGIN.right),
            y_axis: Axis::empty(MARGIN.left, MARGIN.top, LINE_HEIGHT - MARGIN.bottom),
            lines: Vec::new(),
            markers: Vec::new(),
        };
    }

    let date_keys: Vec<String> = all
        .iter()
        .map(|p| p.date_key.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let x = PointScale::new(date_keys.clone(), (MARGIN.left, LINE_WIDTH - MARGIN.right));

    let (min, max) = all.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    });
    let y = LinearScale::new((min, max), (LINE_HEIGHT - MARGIN.bottom, MARGIN.top)).nice();

    let lines = series
        .iter()
        .filter(|(_, _, points)| !points.is_empty())
        .map(|(name, color, points)| {
            let mut path = String::new();
            for (i, point) in points.iter().enumerate() {
                if let Some(px) = x.position(&point.date_key) {
                    let command = if i == 0 { 'M' } else { 'L' };
                    path.push_str(&format!("{command}{px:.2},{py:.2}", py = y.scale(point.value)));
                }
            }
            LinePath {
                name: name.clone(),
                color: color.clone(),
                path,
            }
        })
        .collect();

    let markers = series
        .iter()
        .flat_map(|(_, color, points)| {
            points.iter().filter_map(|point| {
                let px = x.position(&point.date_key)?;
                Some(LineMarker {
                    x: px,
                    y: y.scale(point.value),
                    color: color.clone(),
                    date_key: point.date_key.clone(),
                    value: point.value,
                })
            })
        })
        .collect();

    let x_axis = Axis {
        offset: LINE_HEIGHT - MARGIN.bottom,
        start: MARGIN.left,
        end: LINE_WIDTH - MARGIN.right,
        ticks: date_keys
            .iter()
            .enumerate()
            .filter(|(i, _)| i % X_TICK_STRIDE == 0)
            .filter_map(|(_, key)| {
                Some(Tick {
                    pos: x.position(key)?,
                    label: key.clone(),
                })
            })
            .collect(),
    };
    let y_axis = Axis {
        offset: MARGIN.left,
        start: MARGIN.top,
        end: LINE_HEIGHT - MARGIN.bottom,
        ticks: y
            .ticks(6)
            .into_iter()
            .map(|v| Tick {
                pos: y.scale(v),
                label: format!("{v:.2}"),
            })
            .collect(),
    };

    LineScene {
        width: LINE_WIDTH,
        height: LINE_HEIGHT,
        x_axis,
        y_axis,
        lines,
        markers,
    }
}
