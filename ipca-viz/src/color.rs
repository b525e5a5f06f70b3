//! Color scales and the dashboard theme.
//!
//! Ramps are fixed-stop linear RGB interpolation; the diverging and
//! sequential domains are fixed per chart at design time, not data-driven.

/// Dashboard theme colors.
pub mod theme {
    /// National baseline series and selection highlight.
    pub const BRAZIL_BLUE: &str = "#38bdf8";
    /// Selected-region series and bars.
    pub const REGION_GREEN: &str = "#22c55e";
    /// Neutral fill for boundaries/buckets with no data.
    pub const NO_DATA_FILL: &str = "#334155";
    /// Page background, also the default boundary stroke.
    pub const BACKGROUND: &str = "#020617";
    /// Axis lines and tick labels.
    pub const AXIS: &str = "#94a3b8";
    pub const TOOLTIP_BG: &str = "#020617";
    pub const TOOLTIP_BORDER: &str = "#1e293b";
}

/// An sRGB color with `#rrggbb` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors, t in [0, 1].
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

// RdYlGn endpoints and midpoint (ColorBrewer).
const RD: Rgb = Rgb::new(165, 0, 38);
const YL: Rgb = Rgb::new(255, 255, 191);
const GN: Rgb = Rgb::new(0, 104, 55);

// YlOrRd low / mid / high (ColorBrewer).
const YL_LOW: Rgb = Rgb::new(255, 255, 204);
const OR_MID: Rgb = Rgb::new(254, 178, 76);
const RD_HIGH: Rgb = Rgb::new(189, 0, 38);

/// Diverging color scale centered on a neutral midpoint, for signed
/// deviation metrics. The choropleth uses the fixed domain [-2, 0, 2].
#[derive(Debug, Clone, Copy)]
pub struct DivergingScale {
    min: f64,
    mid: f64,
    max: f64,
    low: Rgb,
    neutral: Rgb,
    high: Rgb,
}

impl DivergingScale {
    /// Red-yellow-green ramp over a (min, mid, max) domain.
    pub fn rd_yl_gn(min: f64, mid: f64, max: f64) -> Self {
        DivergingScale {
            min,
            mid,
            max,
            low: RD,
            neutral: YL,
            high: GN,
        }
    }

    /// The choropleth's fixed deviation domain.
    pub fn choropleth() -> Self {
        Self::rd_yl_gn(-2.0, 0.0, 2.0)
    }

    pub fn color(&self, v: f64) -> String {
        let rgb = if v <= self.mid {
            let span = self.mid - self.min;
            let t = if span > 0.0 { (v - self.min) / span } else { 1.0 };
            Rgb::lerp(self.low, self.neutral, t)
        } else {
            let span = self.max - self.mid;
            let t = if span > 0.0 { (v - self.mid) / span } else { 0.0 };
            Rgb::lerp(self.neutral, self.high, t)
        };
        rgb.hex()
    }
}

/// Sequential color scale from zero to an observed maximum, for magnitude
/// metrics (the alternate map ramp).
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    min: f64,
    max: f64,
}

impl SequentialScale {
    /// Yellow-orange-red ramp over [0, max]. A non-positive max falls back
    /// to a unit domain so mapping stays finite.
    pub fn yl_or_rd(max: f64) -> Self {
        let max = if max > 0.0 && max.is_finite() { max } else { 1.0 };
        SequentialScale { min: 0.0, max }
    }

    pub fn color(&self, v: f64) -> String {
        let t = ((v - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        let rgb = if t <= 0.5 {
            Rgb::lerp(YL_LOW, OR_MID, t * 2.0)
        } else {
            Rgb::lerp(OR_MID, RD_HIGH, (t - 0.5) * 2.0)
        };
        rgb.hex()
    }
}

/// The fixed categorical palette (category10) cycled over region subtrees.
/// Month leaves inherit their parent region's hue rather than drawing a
/// new one.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Hue for the i-th category in a fixed ordering.
pub fn categorical(index: usize) -> &'static str {
    CATEGORY10[index % CATEGORY10.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_format() {
        assert_eq!(Rgb::new(255, 0, 10).hex(), "#ff000a");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
        assert_eq!(Rgb::lerp(a, b, 0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_diverging_endpoints_and_midpoint() {
        let scale = DivergingScale::choropleth();
        assert_eq!(scale.color(-2.0), RD.hex());
        assert_eq!(scale.color(0.0), YL.hex());
        assert_eq!(scale.color(2.0), GN.hex());
        // out-of-domain values clamp
        assert_eq!(scale.color(-10.0), RD.hex());
        assert_eq!(scale.color(10.0), GN.hex());
    }

    #[test]
    fn test_sequential_clamps_and_handles_zero_max() {
        let scale = SequentialScale::yl_or_rd(0.0);
        assert_eq!(scale.color(0.0), YL_LOW.hex());
        let scale = SequentialScale::yl_or_rd(4.0);
        assert_eq!(scale.color(4.0), RD_HIGH.hex());
        assert_eq!(scale.color(99.0), RD_HIGH.hex());
    }

    #[test]
    fn test_categorical_cycles() {
        assert_eq!(categorical(0), CATEGORY10[0]);
        assert_eq!(categorical(10), CATEGORY10[0]);
        assert_eq!(categorical(13), CATEGORY10[3]);
    }
}
