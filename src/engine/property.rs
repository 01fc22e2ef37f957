//! Shared value slots targeted by animations

use std::cell::RefCell;
use std::rc::Rc;

/// A named, independently addressable mutable value slot.
///
/// Cloning a `Property` clones the handle, not the value: an animation and
/// the drawable that owns the slot both hold handles to the same cell, so
/// the animation can retarget "the position of this box" without a reference
/// to the box itself.
///
/// Writer convention: only animations call [`set`](Property::set); drawables
/// only read at draw time. At most one animation should actively target a
/// given slot at a time - this is not enforced, and concurrent writers race
/// with last-step-wins.
#[derive(Debug, Default)]
pub struct Property<T>(Rc<RefCell<T>>);

impl<T> Property<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Replaces the slot's value.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

impl<T: Clone> Property<T> {
    /// Clones the current value out of the slot.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

// Manual impl: handle clones must not require `T: Clone`.
impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
