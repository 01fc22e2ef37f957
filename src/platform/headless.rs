//! No-op surface for running the engine without a browser

use crate::engine::surface::{Color, Surface};

/// Discards all drawing. Text measurement returns a fixed advance per
/// character scaled by the current font size, which is enough for layout
/// code to behave plausibly in tests and native smoke runs.
pub struct NullSurface {
    font_px: f32,
}

impl NullSurface {
    pub fn new() -> Self {
        Self { font_px: 16.0 }
    }
}

impl Default for NullSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for NullSurface {
    fn clear(&mut self) {}

    fn set_fill(&mut self, _color: Color) {}

    fn set_font(&mut self, size_px: f32) {
        self.font_px = size_px;
    }

    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) {}

    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_px * 0.6
    }

    fn fill_round_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _radius: f32) {}
}
