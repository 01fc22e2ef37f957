//! Drawable entities
//!
//! Drawables render themselves from their `Property` slots and never advance
//! time; all state changes arrive through animations targeting those slots.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::property::Property;
use super::surface::Surface;
use crate::consts;

/// Shared liveness flag. The frame loop drops drawables whose flag is down;
/// completion callbacks hold clones so they can remove an entity they do not
/// own.
#[derive(Debug, Clone)]
pub struct Alive(Rc<Cell<bool>>);

impl Alive {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Marks the entity dead. The frame loop excludes it from the next frame.
    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Alive {
    fn default() -> Self {
        Self::new()
    }
}

/// An object that can render itself to a surface and be marked dead.
pub trait Drawable {
    /// Renders current state. Reads `Property` slots only; no mutation.
    fn draw(&self, surface: &mut dyn Surface);

    fn alive(&self) -> bool;
}

/// A message drawn centered horizontally at a position, countdown-sized.
pub struct Text {
    position: Property<Vec2>,
    message: Property<String>,
    alive: Alive,
}

impl Text {
    pub fn new(position: Vec2, message: impl Into<String>) -> Self {
        Self {
            position: Property::new(position),
            message: Property::new(message.into()),
            alive: Alive::new(),
        }
    }

    /// Slot animations target to change the displayed message.
    pub fn message(&self) -> Property<String> {
        self.message.clone()
    }

    pub fn remove_handle(&self) -> Alive {
        self.alive.clone()
    }

    pub fn remove(&self) {
        self.alive.kill();
    }
}

impl Drawable for Text {
    fn draw(&self, surface: &mut dyn Surface) {
        let msg = self.message.get();
        if msg.is_empty() {
            return;
        }
        let pos = self.position.get();

        surface.set_font(consts::COUNTDOWN_FONT_PX);
        surface.set_fill(consts::INK);
        let width = surface.measure_text(&msg);
        surface.fill_text(&msg, pos.x - width / 2.0, pos.y);
    }

    fn alive(&self) -> bool {
        self.alive.is_alive()
    }
}

/// A filled rounded square centered at its position.
///
/// Clones share the same position and size slots, so the game can keep a
/// side list of boxes for retargeting while the drawable list owns clones.
#[derive(Clone)]
pub struct BackgroundBox {
    position: Property<Vec2>,
    size: Property<f32>,
    alive: Alive,
}

impl BackgroundBox {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self {
            position: Property::new(position),
            size: Property::new(size),
            alive: Alive::new(),
        }
    }

    /// Slot animations target to move the box.
    pub fn position(&self) -> Property<Vec2> {
        self.position.clone()
    }

    pub fn remove(&self) {
        self.alive.kill();
    }
}

impl Drawable for BackgroundBox {
    fn draw(&self, surface: &mut dyn Surface) {
        let pos = self.position.get();
        let size = self.size.get();

        surface.set_fill(consts::BOX_FILL);
        surface.fill_round_rect(
            pos.x - size / 2.0,
            pos.y - size / 2.0,
            size,
            size,
            consts::BOX_CORNER_RADIUS,
        );
    }

    fn alive(&self) -> bool {
        self.alive.is_alive()
    }
}
