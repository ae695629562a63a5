// File: crates/fpschart-core/src/scale.rs
// Summary: Linear and log10 projections from data ranges onto the plot rectangle.

use crate::axis::{Axis, ScaleKind};
use crate::geometry::RectI32;

/// One-dimensional scale over a data range.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    vmin: f64,
    vmax: f64,
    log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn linear(vmin: f64, vmax: f64) -> Self {
        let mut s = Self { vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    pub fn log10(mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { vmin, vmax, log: true, log_min, log_max }
    }

    pub fn from_axis(axis: &Axis) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::linear(axis.min, axis.max),
            ScaleKind::Log10 => Self::log10(axis.min, axis.max),
        }
    }

    /// Normalized position of `v` in [0, 1] across the range.
    #[inline]
    pub fn normalized(&self, v: f64) -> f64 {
        if self.log {
            let vv = v.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            (vv - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        }
    }
}

/// Projects data coordinates into a pixel plot rectangle.
/// X grows rightward; Y grows upward in data space, downward in pixels.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    rect: RectI32,
    x: AxisScale,
    y: AxisScale,
}

impl PlotScale {
    pub fn new(rect: RectI32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            rect,
            x: AxisScale::from_axis(x_axis),
            y: AxisScale::from_axis(y_axis),
        }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        self.rect.left as f32 + self.x.normalized(x) as f32 * self.rect.width() as f32
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        self.rect.bottom as f32 - self.y.normalized(y) as f32 * self.rect.height() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log10_endpoints_hit_plot_edges() {
        let rect = RectI32::from_ltrb(100, 10, 900, 510);
        let x = Axis::log10("Lights", 50.0, 1000.0);
        let y = Axis::new("FPS", 0.0, 200.0);
        let s = PlotScale::new(rect, &x, &y);
        assert!((s.to_px_x(50.0) - 100.0).abs() < 1e-3);
        assert!((s.to_px_x(1000.0) - 900.0).abs() < 1e-3);
        assert!((s.to_px_y(0.0) - 510.0).abs() < 1e-3);
        assert!((s.to_px_y(200.0) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn log10_projection_is_monotone() {
        let rect = RectI32::from_ltrb(0, 0, 1000, 500);
        let x = Axis::log10("Lights", 50.0, 100000.0);
        let y = Axis::new("FPS", 0.0, 1.0);
        let s = PlotScale::new(rect, &x, &y);
        let pts = [50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 100000.0];
        for w in pts.windows(2) {
            assert!(s.to_px_x(w[0]) < s.to_px_x(w[1]));
        }
        // Equal ratios cover equal pixel spans on a log scale.
        let d1 = s.to_px_x(1000.0) - s.to_px_x(100.0);
        let d2 = s.to_px_x(10000.0) - s.to_px_x(1000.0);
        assert!((d1 - d2).abs() < 1e-3);
    }

    #[test]
    fn log10_clamps_nonpositive_range() {
        let s = AxisScale::log10(0.0, -5.0);
        // Still usable and monotone.
        assert!(s.normalized(1e-12) <= s.normalized(1e-11));
    }
}
