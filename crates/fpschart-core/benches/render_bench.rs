// File: crates/fpschart-core/benches/render_bench.rs
// Summary: Criterion benchmark for the CPU raster render path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fpschart_core::{Axis, Chart, Marker, RenderOptions, Series};

fn build_chart(points: usize) -> Chart {
    let xs: Vec<f64> = (0..points).map(|i| i as f64).collect();
    let ys: Vec<Option<f64>> = (0..points)
        .map(|i| {
            // Sparse gaps keep the segment-splitting path in the measurement.
            if i % 97 == 0 {
                None
            } else {
                Some(100.0 + 80.0 * (i as f64 * 0.01).sin())
            }
        })
        .collect();

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, (points - 1) as f64);
    chart.y_axis = Axis::new("Y", 0.0, 200.0);
    chart.add_series(Series::from_columns("bench", Marker::Circle, &xs, &ys).unwrap());
    chart
}

fn bench_render(c: &mut Criterion) {
    let chart = build_chart(1_000);
    let mut opts = RenderOptions::default();
    opts.width = 1200;
    opts.height = 750;
    opts.draw_labels = false;

    c.bench_function("render_rgba8_1200x750_1k_points", |b| {
        b.iter(|| {
            let out = chart.render_to_rgba8(black_box(&opts)).unwrap();
            black_box(out);
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
