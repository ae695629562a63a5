// File: crates/report/src/data.rs
// Summary: Measured FPS per renderer across scene light counts.
// Notes: `None` marks runs where the renderer could no longer produce a
// measurable frame rate; those are gaps in the chart, not zeros.

/// Scene light counts (shared x-domain).
pub const LIGHTS: [f64; 9] = [
    50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 100000.0,
];

pub const FPS_NAIVE: [Option<f64>; 9] = [
    Some(103.0),
    Some(53.0),
    Some(23.0),
    Some(12.0),
    Some(6.0),
    None,
    None,
    None,
    None,
];

pub const FPS_FORWARD_PLUS: [Option<f64>; 9] = [
    Some(172.0),
    Some(173.0),
    Some(174.0),
    Some(171.0),
    Some(117.0),
    Some(50.0),
    Some(33.0),
    Some(22.0),
    Some(14.0),
];

pub const FPS_CLUSTERED_DEFERRED: [Option<f64>; 9] = [
    Some(173.0),
    Some(174.0),
    Some(176.0),
    Some(173.0),
    Some(171.0),
    Some(117.0),
    Some(80.0),
    Some(56.0),
    Some(25.0),
];

/// The chart compares the renderers over the first five light counts,
/// the span where the naive renderer still has measurements.
pub const PLOTTED_POINTS: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_share_one_domain_length() {
        assert_eq!(LIGHTS.len(), FPS_NAIVE.len());
        assert_eq!(LIGHTS.len(), FPS_FORWARD_PLUS.len());
        assert_eq!(LIGHTS.len(), FPS_CLUSTERED_DEFERRED.len());
    }

    #[test]
    fn plotted_subset_has_no_missing_entries() {
        for col in [&FPS_NAIVE, &FPS_FORWARD_PLUS, &FPS_CLUSTERED_DEFERRED] {
            assert!(col[..PLOTTED_POINTS].iter().all(Option::is_some));
        }
    }

    #[test]
    fn light_counts_strictly_increase() {
        assert!(LIGHTS.windows(2).all(|w| w[0] < w[1]));
    }
}
