// File: crates/fpschart-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind, and explicit ticks.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Explicit tick positions in data units. Empty means "auto".
    pub ticks: Vec<f64>,
    /// Clockwise tick-label rotation in degrees (0 = horizontal).
    pub tick_rotation_deg: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            ticks: Vec::new(),
            tick_rotation_deg: 0.0,
        }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label, min, max);
        a.kind = ScaleKind::Log10;
        a
    }

    /// Pin ticks to literal positions (labels rendered plain, not scientific).
    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation_deg = degrees;
        self
    }

    /// Tick positions to draw: explicit ticks clipped to range, or auto
    /// "nice" ticks for a linear axis.
    pub fn tick_positions(&self) -> Vec<f64> {
        if !self.ticks.is_empty() {
            return self
                .ticks
                .iter()
                .copied()
                .filter(|t| *t >= self.min - 1e-9 && *t <= self.max + 1e-9)
                .collect();
        }
        match self.kind {
            ScaleKind::Linear => crate::grid::nice_ticks(self.min, self.max, 6),
            ScaleKind::Log10 => {
                // Decade ticks over a positive range.
                let lo = self.min.max(1e-12).log10().ceil() as i32;
                let hi = self.max.max(1e-12).log10().floor() as i32;
                (lo..=hi).map(|e| 10f64.powi(e)).collect()
            }
        }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }
}

/// Plain decimal tick label, no scientific notation.
/// Whole numbers print without a fraction part.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_ticks_clip_to_range() {
        let a = Axis::log10("Lights", 50.0, 1000.0)
            .with_ticks(vec![50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0]);
        assert_eq!(a.tick_positions(), vec![50.0, 100.0, 250.0, 500.0, 1000.0]);
    }

    #[test]
    fn log_auto_ticks_are_decades() {
        let a = Axis::log10("Lights", 50.0, 100000.0);
        assert_eq!(
            a.tick_positions(),
            vec![100.0, 1000.0, 10000.0, 100000.0]
        );
    }

    #[test]
    fn plain_labels_never_scientific() {
        assert_eq!(format_tick(100000.0), "100000");
        assert_eq!(format_tick(250.0), "250");
        assert_eq!(format_tick(0.25), "0.25");
    }
}
