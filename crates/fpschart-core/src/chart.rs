// File: crates/fpschart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{format_tick, Axis};
use crate::geometry::RectI32;
use crate::scale::PlotScale;
use crate::series::{Marker, Series};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::TextShaper;

const TICK_FONT_PX: f32 = 38.0;
const TITLE_FONT_PX: f32 = 44.0;
const LEGEND_FONT_PX: f32 = 38.0;
const TICK_MARK_PX: f32 = 14.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable all text (labels, ticks, legend) to avoid font variance in tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit axis ranges to the present data points, expanded by `margin`
    /// (fraction of the span). Missing measurements are ignored.
    /// Scale kind, ticks, and labels are left untouched.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for (x, y) in s.present() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min - xm;
        self.x_axis.max = x_max + xm;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        // Snapshot and write PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;

        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, data.as_bytes())?;
        Ok(())
    }

    /// Render to an RGBA8 buffer: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::inset_of(opts.width, opts.height, &opts.insets);
        let scale = PlotScale::new(plot, &self.x_axis, &self.y_axis);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        draw_grid(canvas, plot, &scale, &self.x_axis, &self.y_axis, theme);
        draw_axes(
            canvas,
            plot,
            &scale,
            &self.x_axis,
            &self.y_axis,
            theme,
            shaper.as_ref(),
        );
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &scale, s, theme.series_color(i));
        }
        if let Some(shaper) = shaper.as_ref() {
            draw_legend(canvas, plot, &self.series, theme, shaper);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    scale: &PlotScale,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(2.0);
    paint.set_path_effect(skia::dash_path_effect::new(&[14.0, 10.0], 0.0));

    // verticals at x ticks
    for t in x_axis.tick_positions() {
        let x = scale.to_px_x(t);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    // horizontals at y ticks
    for t in y_axis.tick_positions() {
        let y = scale.to_px_y(t);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    scale: &PlotScale,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let (l, t, r, b) = (
        plot.left as f32,
        plot.top as f32,
        plot.right as f32,
        plot.bottom as f32,
    );

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(3.0);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    // Tick marks
    for tick in x_axis.tick_positions() {
        let x = scale.to_px_x(tick);
        canvas.draw_line((x, b), (x, b + TICK_MARK_PX), &axis_paint);
    }
    for tick in y_axis.tick_positions() {
        let y = scale.to_px_y(tick);
        canvas.draw_line((l - TICK_MARK_PX, y), (l, y), &axis_paint);
    }

    let Some(shaper) = shaper else { return };

    // X tick labels, rotated clockwise when the axis asks for it
    for tick in x_axis.tick_positions() {
        let x = scale.to_px_x(tick);
        let label = format_tick(tick);
        if x_axis.tick_rotation_deg != 0.0 {
            shaper.draw_rotated_right(
                canvas,
                &label,
                x,
                b + TICK_MARK_PX + TICK_FONT_PX,
                x_axis.tick_rotation_deg,
                TICK_FONT_PX,
                theme.tick,
                true,
            );
        } else {
            let w = shaper.measure_width(&label, TICK_FONT_PX, true);
            shaper.draw_left(
                canvas,
                &label,
                x - w * 0.5,
                b + TICK_MARK_PX + TICK_FONT_PX,
                TICK_FONT_PX,
                theme.tick,
                true,
            );
        }
    }

    // Y tick labels, right-aligned against the axis
    for tick in y_axis.tick_positions() {
        let y = scale.to_px_y(tick);
        let label = format_tick(tick);
        let w = shaper.measure_width(&label, TICK_FONT_PX, true);
        shaper.draw_left(
            canvas,
            &label,
            l - TICK_MARK_PX - 10.0 - w,
            y + TICK_FONT_PX * 0.35,
            TICK_FONT_PX,
            theme.tick,
            true,
        );
    }

    // Axis titles: x centered below the tick labels, y rotated along the axis
    let xw = shaper.measure_width(&x_axis.label, TITLE_FONT_PX, false);
    shaper.draw_left(
        canvas,
        &x_axis.label,
        (l + r) * 0.5 - xw * 0.5,
        b + TICK_MARK_PX + TICK_FONT_PX * 3.2,
        TITLE_FONT_PX,
        theme.axis_label,
        false,
    );

    let yw = shaper.measure_width(&y_axis.label, TITLE_FONT_PX, false);
    canvas.save();
    canvas.translate((l - TICK_MARK_PX - TICK_FONT_PX * 3.0, (t + b) * 0.5));
    canvas.rotate(-90.0, None);
    shaper.draw_left(canvas, &y_axis.label, -yw * 0.5, 0.0, TITLE_FONT_PX, theme.axis_label, false);
    canvas.restore();
}

fn draw_line_series(canvas: &skia::Canvas, scale: &PlotScale, series: &Series, color: skia::Color) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(4.5);
    stroke.set_color(color);

    // Polyline per contiguous run; missing values break the line.
    for run in series.segments() {
        if run.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        let (x0, y0) = run[0];
        path.move_to((scale.to_px_x(x0), scale.to_px_y(y0)));
        for &(x, y) in run.iter().skip(1) {
            path.line_to((scale.to_px_x(x), scale.to_px_y(y)));
        }
        canvas.draw_path(&path, &stroke);
    }

    // One marker per present point
    for (x, y) in series.present() {
        draw_marker(canvas, series.marker, scale.to_px_x(x), scale.to_px_y(y), 10.0, color);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, r: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    match marker {
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Square => {
            let rect = skia::Rect::from_ltrb(x - r, y - r, x + r, y + r);
            canvas.draw_rect(rect, &fill);
        }
        Marker::Cross => {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(4.5);
            stroke.set_color(color);
            canvas.draw_line((x - r, y - r), (x + r, y + r), &stroke);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &stroke);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: RectI32,
    series: &[Series],
    theme: &Theme,
    shaper: &TextShaper,
) {
    if series.is_empty() {
        return;
    }

    let pad = 24.0f32;
    let swatch_w = 70.0f32;
    let row_h = LEGEND_FONT_PX * 1.6;
    let label_w = series
        .iter()
        .map(|s| shaper.measure_width(&s.label, LEGEND_FONT_PX, false))
        .fold(0.0f32, f32::max);
    let box_w = pad + swatch_w + 16.0 + label_w + pad;
    let box_h = pad + row_h * series.len() as f32 + pad - (row_h - LEGEND_FONT_PX);

    // Top-right corner inside the plot
    let right = plot.right as f32 - 30.0;
    let top = plot.top as f32 + 30.0;
    let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.legend_background);
    canvas.draw_rect(rect, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(2.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(rect, &border);

    for (i, s) in series.iter().enumerate() {
        let color = theme.series_color(i);
        let cy = top + pad + row_h * i as f32 + LEGEND_FONT_PX * 0.5;
        let sx = rect.left + pad;

        // Line swatch with the series marker centered on it
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(4.5);
        stroke.set_color(color);
        canvas.draw_line((sx, cy), (sx + swatch_w, cy), &stroke);
        draw_marker(canvas, s.marker, sx + swatch_w * 0.5, cy, 10.0, color);

        shaper.draw_left(
            canvas,
            &s.label,
            sx + swatch_w + 16.0,
            cy + LEGEND_FONT_PX * 0.35,
            LEGEND_FONT_PX,
            theme.axis_label,
            false,
        );
    }
}
