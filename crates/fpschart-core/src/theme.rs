// File: crates/fpschart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, including the series palette.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Series stroke colors, cycled by series index.
    pub palette: Vec<skia::Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            // ~0.4 alpha over white
            grid: skia::Color::from_argb(102, 120, 120, 128),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 70, 70, 80),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 180, 180, 190),
            palette: vec![
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(102, 140, 140, 150),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(230, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            palette: vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 160, 64),
                skia::Color::from_argb(255, 80, 210, 130),
                skia::Color::from_argb(255, 230, 90, 90),
            ],
        }
    }

    /// Stroke color for the series at `index`, cycling the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        let n = t.palette.len();
        assert_eq!(t.series_color(0), t.series_color(n));
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("no-such-theme").name, "light");
        assert_eq!(find("DARK").name, "dark");
    }
}
