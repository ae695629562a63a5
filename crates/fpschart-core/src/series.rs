// File: crates/fpschart-core/src/series.rs
// Summary: Series model for marker+line measurement data with optional (missing) values.
// Notes:
// - A `None` y-value is a missing measurement. Rendering must leave a gap
//   there; it must never be coerced to zero.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("x/y column length mismatch: {x_len} x-values vs {y_len} y-values")]
    LengthMismatch { x_len: usize, y_len: usize },
}

/// Marker drawn at each present data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Cross,
}

#[derive(Clone)]
pub struct Series {
    pub label: String,
    pub marker: Marker,
    pub points: Vec<(f64, Option<f64>)>,
}

impl Series {
    pub fn new(label: impl Into<String>, marker: Marker) -> Self {
        Self { label: label.into(), marker, points: Vec::new() }
    }

    /// Build a series from parallel x/y columns.
    /// Columns of different lengths are rejected.
    pub fn from_columns(
        label: impl Into<String>,
        marker: Marker,
        xs: &[f64],
        ys: &[Option<f64>],
    ) -> Result<Self, SeriesError> {
        if xs.len() != ys.len() {
            return Err(SeriesError::LengthMismatch { x_len: xs.len(), y_len: ys.len() });
        }
        let points = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self { label: label.into(), marker, points })
    }

    /// Restrict the series to its first `n` points.
    pub fn take(mut self, n: usize) -> Self {
        self.points.truncate(n);
        self
    }

    /// Maximal runs of present points. Each run renders as one polyline;
    /// missing values separate runs and therefore show as gaps.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut run: Vec<(f64, f64)> = Vec::new();
        for &(x, y) in &self.points {
            match y {
                Some(y) => run.push((x, y)),
                None => {
                    if !run.is_empty() {
                        runs.push(std::mem::take(&mut run));
                    }
                }
            }
        }
        if !run.is_empty() {
            runs.push(run);
        }
        runs
    }

    /// Iterate over present points only.
    pub fn present(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().filter_map(|&(x, y)| y.map(|y| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_rejects_mismatch() {
        let err = Series::from_columns("a", Marker::Circle, &[1.0, 2.0], &[Some(1.0)]);
        assert_eq!(
            err.err(),
            Some(SeriesError::LengthMismatch { x_len: 2, y_len: 1 })
        );
    }

    #[test]
    fn segments_split_on_missing() {
        let s = Series::from_columns(
            "a",
            Marker::Cross,
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[Some(10.0), Some(9.0), None, None, Some(3.0)],
        )
        .unwrap();
        let segs = s.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], vec![(1.0, 10.0), (2.0, 9.0)]);
        assert_eq!(segs[1], vec![(5.0, 3.0)]);
    }

    #[test]
    fn take_truncates_points() {
        let s = Series::from_columns(
            "a",
            Marker::Square,
            &[1.0, 2.0, 3.0],
            &[Some(1.0), Some(2.0), Some(3.0)],
        )
        .unwrap()
        .take(2);
        assert_eq!(s.points.len(), 2);
    }
}
