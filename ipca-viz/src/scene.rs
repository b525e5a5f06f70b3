//! Shared scene primitives.
//!
//! A scene is a plain description of what a chart should show; the UI
//! crate reconciles it against the output surface. Scenes are rebuilt
//! whole on every data or filter change and never mutated.

use serde::Serialize;

/// One labeled tick along an axis, at a pixel position on the along-axis
/// coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

/// An axis line with its ticks. `offset` is the cross-axis pixel (the y of
/// a bottom axis, the x of a left axis); `start`/`end` span the along-axis
/// range. An empty filtered selection yields an axis with no ticks, which
/// is still a valid (empty) scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub offset: f64,
    pub start: f64,
    pub end: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn empty(offset: f64, start: f64, end: f64) -> Self {
        Axis {
            offset,
            start,
            end,
            ticks: Vec::new(),
        }
    }
}

/// Chart frame margins, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_axis() {
        let axis = Axis::empty(320.0, 60.0, 780.0);
        assert!(axis.ticks.is_empty());
        assert_eq!(axis.offset, 320.0);
    }
}
