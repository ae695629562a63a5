// File: crates/report/src/main.rs
// Summary: Renders the renderer-comparison chart to performance_comparison.png and shows it.

mod data;
mod viewer;

use anyhow::Result;
use fpschart_core::types::DPI;
use fpschart_core::{Axis, Chart, Marker, RenderOptions, Series};
use log::info;

const OUTPUT_PATH: &str = "performance_comparison.png";
const WINDOW_TITLE: &str = "Renderer FPS vs Light Count";

fn main() -> Result<()> {
    env_logger::init();

    let chart = build_chart()?;
    let opts = RenderOptions::default();
    chart.render_to_png(&opts, OUTPUT_PATH)?;
    info!(
        "wrote {} ({}x{} at {} dpi)",
        OUTPUT_PATH, opts.width, opts.height, DPI
    );

    viewer::show(chart, WINDOW_TITLE)
}

fn build_chart() -> Result<Chart> {
    let n = data::PLOTTED_POINTS;

    let mut chart = Chart::new();
    chart.add_series(
        Series::from_columns("Forward+", Marker::Circle, &data::LIGHTS, &data::FPS_FORWARD_PLUS)?
            .take(n),
    );
    chart.add_series(
        Series::from_columns(
            "Clustered Deferred",
            Marker::Square,
            &data::LIGHTS,
            &data::FPS_CLUSTERED_DEFERRED,
        )?
        .take(n),
    );
    chart.add_series(
        Series::from_columns("Naive", Marker::Cross, &data::LIGHTS, &data::FPS_NAIVE)?.take(n),
    );

    // Y range from the measurements, then pin the log x-axis to the
    // literal light counts with plain rotated labels.
    chart.autoscale_axes(0.05);
    let (y_min, y_max) = (chart.y_axis.min, chart.y_axis.max);
    chart.y_axis = Axis::new("Frames Per Second (FPS)", y_min, y_max);

    let ticks: Vec<f64> = data::LIGHTS[..n].to_vec();
    chart.x_axis = Axis::log10("Number of Lights", ticks[0], ticks[n - 1])
        .with_ticks(ticks)
        .with_tick_rotation(30.0);

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpschart_core::ScaleKind;

    #[test]
    fn chart_has_three_series_over_five_points() {
        let chart = build_chart().unwrap();
        assert_eq!(chart.series.len(), 3);
        for s in &chart.series {
            assert_eq!(s.points.len(), data::PLOTTED_POINTS);
        }
    }

    #[test]
    fn x_axis_is_log_with_literal_ticks() {
        let chart = build_chart().unwrap();
        assert_eq!(chart.x_axis.kind, ScaleKind::Log10);
        assert_eq!(
            chart.x_axis.tick_positions(),
            vec![50.0, 100.0, 250.0, 500.0, 1000.0]
        );
        assert_eq!(chart.x_axis.tick_rotation_deg, 30.0);
    }

    #[test]
    fn y_range_covers_all_plotted_fps() {
        let chart = build_chart().unwrap();
        assert!(chart.y_axis.min <= 6.0);
        assert!(chart.y_axis.max >= 176.0);
    }
}
