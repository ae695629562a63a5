// File: crates/fpschart-core/tests/autoscale.rs
// Purpose: Validate autoscale over series with missing measurements.

use fpschart_core::{Chart, Marker, Series};

#[test]
fn autoscale_ignores_missing_values() {
    let mut chart = Chart::new();

    chart.add_series(
        Series::from_columns(
            "naive",
            Marker::Cross,
            &[50.0, 100.0, 250.0, 100000.0],
            &[Some(103.0), Some(53.0), Some(23.0), None],
        )
        .unwrap(),
    );
    chart.add_series(
        Series::from_columns(
            "forward",
            Marker::Circle,
            &[50.0, 100.0, 250.0],
            &[Some(172.0), Some(173.0), Some(174.0)],
        )
        .unwrap(),
    );

    chart.autoscale_axes(0.0);

    // The x=100000 sample carries no measurement and must not stretch the axis.
    assert!(chart.x_axis.min <= 50.0 + 1e-9);
    assert!((chart.x_axis.max - 250.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 23.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 174.0).abs() < 1e-9);
}

#[test]
fn autoscale_applies_margin() {
    let mut chart = Chart::new();
    chart.add_series(
        Series::from_columns("a", Marker::Circle, &[0.0, 10.0], &[Some(0.0), Some(100.0)])
            .unwrap(),
    );
    chart.autoscale_axes(0.05);
    assert!((chart.y_axis.min + 5.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 105.0).abs() < 1e-9);
}

#[test]
fn autoscale_leaves_axes_untouched_without_data() {
    let mut chart = Chart::new();
    let before = (chart.x_axis.min, chart.x_axis.max, chart.y_axis.min, chart.y_axis.max);
    chart.autoscale_axes(0.05);
    let after = (chart.x_axis.min, chart.x_axis.max, chart.y_axis.min, chart.y_axis.max);
    assert_eq!(before, after);
}
