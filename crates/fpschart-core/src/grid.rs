// File: crates/fpschart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round ticks for a linear axis: a 1/2/5 x 10^k step sized to yield
/// roughly `target` ticks inside [min, max].
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }
    let raw_step = span / target as f64;
    let mag = 10f64.powf(raw_step.log10().floor());
    let norm = raw_step / mag;
    let step = if norm <= 1.0 {
        mag
    } else if norm <= 2.0 {
        2.0 * mag
    } else if norm <= 5.0 {
        5.0 * mag
    } else {
        10.0 * mag
    };
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut t = first;
    while t <= max + step * 1e-9 {
        // Snap away float drift so labels print clean.
        ticks.push((t / step).round() * step);
        t += step;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 10.0, 5);
        assert_eq!(v, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn nice_ticks_are_round_and_in_range() {
        let t = nice_ticks(0.0, 180.0, 6);
        assert!(!t.is_empty());
        for v in &t {
            assert!(*v >= 0.0 && *v <= 180.0);
            // 1/2/5 steps land on multiples of the step; here step is 25 or 50.
            assert_eq!(*v % 5.0, 0.0);
        }
    }

    #[test]
    fn nice_ticks_empty_for_degenerate_range() {
        assert!(nice_ticks(5.0, 5.0, 6).is_empty());
    }
}
