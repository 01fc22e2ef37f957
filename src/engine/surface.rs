//! Abstract 2D drawing surface
//!
//! The engine never touches a real canvas; it renders through this trait.
//! Platform implementations live in `crate::platform`.

/// sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS serialization for canvas fill styles.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A 2D raster surface with known pixel dimensions.
///
/// Coordinates are pixels, origin top-left. Calls never fail: a drawing
/// failure is expected to be impossible given a valid surface, so platform
/// impls swallow host errors rather than propagate them into the frame loop.
pub trait Surface {
    /// Clears the whole surface.
    fn clear(&mut self);

    /// Sets the fill color for subsequent fills and text.
    fn set_fill(&mut self, color: Color);

    /// Sets the font size for subsequent text calls.
    fn set_font(&mut self, size_px: f32);

    /// Draws `text` with its left edge at `x`, baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    /// Width of `text` under the current font, pixels.
    fn measure_text(&mut self, text: &str) -> f32;

    /// Fills a rounded rectangle with top-left corner `(x, y)`.
    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32);
}
