//! Springbox - a countdown-and-springy-boxes canvas toy
//!
//! Core modules:
//! - `engine`: Deterministic animation core (frame loop, drawables, animations)
//! - `platform`: Browser/native drawing-surface implementations
//! - `settings`: Settings-panel parameters

pub mod engine;
pub mod platform;
pub mod settings;

pub use engine::game::Game;
pub use engine::surface::{Color, Surface};
pub use settings::Settings;

/// Gameplay constants
pub mod consts {
    use crate::engine::surface::Color;

    /// Side length of a background box, pixels
    pub const BOX_SIZE: f32 = 40.0;
    /// Corner radius of a background box, pixels
    pub const BOX_CORNER_RADIUS: f32 = 6.0;
    /// Gap between boxes in the initial grid, pixels
    pub const BOX_GAP: f32 = 16.0;
    /// Background box fill
    pub const BOX_FILL: Color = Color::rgb(200, 200, 200);

    /// Default ink for text and strokes
    pub const INK: Color = Color::BLACK;
    /// Countdown digit font size, pixels (8rem at the default root size)
    pub const COUNTDOWN_FONT_PX: f32 = 128.0;
    /// Base font size restored at the start of every frame, pixels
    pub const BASE_FONT_PX: f32 = 16.0;

    /// Countdown starts at this value and steps down to 1
    pub const COUNTDOWN_START: u32 = 3;
    /// Time each countdown digit stays up, milliseconds
    pub const COUNTDOWN_STEP_MS: f64 = 1000.0;

    /// Shortest position-click move, milliseconds
    pub const MOVE_DURATION_MIN_MS: f64 = 1000.0;
    /// Position-click move durations are sampled from
    /// `[MOVE_DURATION_MIN_MS, MOVE_DURATION_MAX_MS)`
    pub const MOVE_DURATION_MAX_MS: f64 = 2000.0;

    /// Upper bound on the box-count setting
    pub const MAX_BOX_COUNT: u32 = 128;
}
