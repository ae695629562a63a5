// File: crates/fpschart-core/src/types.rs
// Summary: Shared types and constants (surface size, DPI, paddings).

/// Default surface width in pixels (8 in at 300 DPI).
pub const WIDTH: i32 = 2400;
/// Default surface height in pixels (5 in at 300 DPI).
pub const HEIGHT: i32 = 1500;
/// Raster density the default surface corresponds to.
pub const DPI: u32 = 300;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // Bottom leaves room for rotated tick labels plus the axis title.
        Self::new(220, 70, 70, 230)
    }
}
