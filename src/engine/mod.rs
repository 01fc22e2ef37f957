//! Deterministic animation core
//!
//! Everything the frame loop touches lives here. This module must stay pure:
//! - Seeded RNG only
//! - Time arrives as millisecond deltas from the caller
//! - No platform or DOM dependencies; drawing goes through the `Surface` trait
//! - Single render loop, no cross-frame concurrent access

pub mod animation;
pub mod easing;
pub mod entity;
pub mod game;
pub mod property;
pub mod surface;

pub use animation::{AnimHandle, AnimState, Animate, Animation, StringAnimation, Vec2Animation};
pub use easing::ease_out_elastic;
pub use entity::{Alive, BackgroundBox, Drawable, Text};
pub use game::Game;
pub use property::Property;
pub use surface::{Color, Surface};
