//! Browser 2D canvas surface

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::engine::surface::{Color, Surface};

const FONT_FAMILY: &str = "'Nunito', sans-serif";

/// `Surface` over a `CanvasRenderingContext2d`.
///
/// Host errors are swallowed: a fill or measure failing on a live 2D context
/// is not a condition the frame loop can do anything about.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Wraps the canvas's 2D context. Returns `None` when the context is
    /// unavailable or of the wrong type.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn set_fill(&mut self, color: Color) {
        let css = color.to_css();
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_stroke_style_str(&css);
    }

    fn set_font(&mut self, size_px: f32) {
        self.ctx.set_font(&format!("{size_px}px {FONT_FAMILY}"));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) {
        // Canvas roundRect is not universally available; trace the path with
        // arcTo instead.
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0);
        let ctx = &self.ctx;

        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
        ctx.fill();
    }
}
