//! Continuous and ordinal scales.
//!
//! These are rebuilt from the currently filtered domain on every data or
//! filter change; none of them is ever mutated in place.

/// Continuous linear mapping from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// Build a scale over `domain`. A collapsed domain (min == max, the
    /// single-value extent case) is expanded symmetrically by one unit so
    /// mapping never divides by zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if !d0.is_finite() || !d1.is_finite() {
            d0 = 0.0;
            d1 = 1.0;
        }
        if d0 == d1 {
            d0 -= 1.0;
            d1 += 1.0;
        }
        LinearScale {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Round the domain endpoints outward to tick-friendly values.
    pub fn nice(mut self) -> Self {
        let step = tick_step(self.d0, self.d1, 10);
        if step > 0.0 && step.is_finite() {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    /// Map a domain value to the pixel range.
    pub fn scale(&self, v: f64) -> f64 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }

    /// Roughly `count` tick values inside the domain, at round steps.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = tick_step(self.d0, self.d1, count.max(1));
        if step <= 0.0 || !step.is_finite() {
            return vec![self.d0, self.d1];
        }
        let start = (self.d0 / step).ceil();
        let stop = (self.d1 / step).floor();
        let mut ticks = Vec::new();
        let mut i = start;
        while i <= stop {
            ticks.push(i * step);
            i += 1.0;
        }
        ticks
    }
}

/// Round tick step for a domain span, choosing among 1/2/5 powers of ten.
fn tick_step(d0: f64, d1: f64, count: usize) -> f64 {
    let span = (d1 - d0).abs();
    if span == 0.0 {
        return 0.0;
    }
    let step = span / count as f64;
    let power = step.log10().floor();
    let base = 10f64.powf(power);
    let err = step / base;
    // thresholds are sqrt(50), sqrt(10), sqrt(2)
    let factor = if err >= 7.071 {
        10.0
    } else if err >= 3.162 {
        5.0
    } else if err >= 1.414 {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Ordinal scale allocating one band per discrete category, with a fixed
/// padding fraction between bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    r0: f64,
    r1: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        BandScale {
            domain,
            r0: range.0,
            r1: range.1,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        (self.r1 - self.r0) / (n + self.padding)
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of a category's band. None for unknown categories.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.domain.iter().position(|k| k == key)?;
        let step = self.step();
        Some(self.r0 + step * self.padding + i as f64 * step)
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Ordinal scale placing each discrete ordered key at a point, endpoints
/// at the range edges. Used for chronological date-key axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    domain: Vec<String>,
    r0: f64,
    r1: f64,
}

impl PointScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        PointScale {
            domain,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Pixel position of a key. A single-key domain maps to the range
    /// midpoint. None for unknown keys.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.domain.iter().position(|k| k == key)?;
        let n = self.domain.len();
        if n == 1 {
            return Some((self.r0 + self.r1) / 2.0);
        }
        let t = i as f64 / (n - 1) as f64;
        Some(self.r0 + t * (self.r1 - self.r0))
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}
