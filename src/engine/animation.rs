//! Timed animations and their dependency scheduling
//!
//! An [`Animation`] is a tiny state machine advanced once per frame by the
//! game loop. It stays `Pending` until every prerequisite is complete, runs
//! its variant's [`Animate::step`] while `InProgress`, and fires completion
//! callbacks exactly once on the transition to `Complete`. Dependencies are
//! shared completion flags, so a linear countdown chain and arbitrary DAGs
//! cost the same. Cycles are not detected: every member of a cycle stays
//! `Pending` forever.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::easing::ease_out_elastic;
use super::property::Property;

/// Lifecycle of an animation. States are never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    /// Waiting on prerequisites; internal time does not accrue.
    Pending,
    /// Stepping every frame.
    InProgress,
    /// Terminal.
    Complete,
}

/// Shared completion flag for one animation, used as a prerequisite handle
/// by others.
#[derive(Debug, Clone)]
pub struct AnimHandle(Rc<Cell<bool>>);

impl AnimHandle {
    pub fn is_complete(&self) -> bool {
        self.0.get()
    }
}

/// Variant behavior of an animation.
pub trait Animate {
    /// Advances internal time by `delta` milliseconds and applies the
    /// current value to the target slot. Returns true once finished.
    fn step(&mut self, delta: f64) -> bool;
}

/// A scheduled animation: variant behavior plus lifecycle state,
/// prerequisites, and completion callbacks.
pub struct Animation {
    state: AnimState,
    deps: Vec<AnimHandle>,
    done: Rc<Cell<bool>>,
    on_complete: Vec<Box<dyn FnOnce()>>,
    kind: Box<dyn Animate>,
}

impl Animation {
    pub fn new(kind: impl Animate + 'static) -> Self {
        Self {
            state: AnimState::Pending,
            deps: Vec::new(),
            done: Rc::new(Cell::new(false)),
            on_complete: Vec::new(),
            kind: Box::new(kind),
        }
    }

    /// Handle other animations can depend on.
    pub fn handle(&self) -> AnimHandle {
        AnimHandle(Rc::clone(&self.done))
    }

    /// Holds this animation `Pending` until `dep` completes.
    pub fn depends_on(&mut self, dep: AnimHandle) {
        self.deps.push(dep);
    }

    /// Registers a callback fired on the transition to `Complete`.
    /// Callbacks run exactly once, in registration order.
    pub fn on_complete(&mut self, f: impl FnOnce() + 'static) {
        self.on_complete.push(Box::new(f));
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == AnimState::Complete
    }

    /// One frame's worth of lifecycle.
    ///
    /// A `Pending` animation whose prerequisites have all completed becomes
    /// `InProgress`; that activation consumes the call, so its internal
    /// timer starts from zero on the next one. This keeps a dependency
    /// chain from collapsing in a single frame when every member is stepped
    /// with the same large delta.
    pub fn managed_step(&mut self, delta: f64) {
        match self.state {
            AnimState::Pending => {
                if self.deps.iter().all(AnimHandle::is_complete) {
                    self.state = AnimState::InProgress;
                }
            }
            AnimState::InProgress => {
                if self.kind.step(delta) {
                    self.state = AnimState::Complete;
                    self.done.set(true);
                    for cb in self.on_complete.drain(..) {
                        cb();
                    }
                }
            }
            AnimState::Complete => {}
        }
    }
}

/// Holds a string slot at a fixed end value for a duration.
///
/// The target is written on the first step, so the text appears the moment
/// the animation becomes active; completion is purely a matter of elapsed
/// time.
pub struct StringAnimation {
    target: Property<String>,
    end: String,
    duration: f64,
    elapsed: f64,
}

impl StringAnimation {
    pub fn new(target: Property<String>, end: impl Into<String>, duration: f64) -> Self {
        Self {
            target,
            end: end.into(),
            duration,
            elapsed: 0.0,
        }
    }
}

impl Animate for StringAnimation {
    fn step(&mut self, delta: f64) -> bool {
        self.target.set(self.end.clone());
        self.elapsed += delta;
        self.elapsed >= self.duration
    }
}

/// Eases a position slot from its current value to `end` with an elastic
/// overshoot.
///
/// The start point, direction and path length are captured at construction,
/// not at activation: an animation queued behind prerequisites keeps its
/// snapshot even if the target moves in the meantime. A zero-length path
/// makes the direction non-finite and NaN propagates into the written
/// positions; callers own that edge.
pub struct Vec2Animation {
    target: Property<Vec2>,
    start: Vec2,
    dir: Vec2,
    length: f32,
    duration: f64,
    elapsed: f64,
}

impl Vec2Animation {
    pub fn new(target: Property<Vec2>, end: Vec2, duration: f64) -> Self {
        let start = target.get();
        let path = end - start;
        Self {
            target,
            start,
            dir: path.normalize(),
            length: path.length(),
            duration,
            elapsed: 0.0,
        }
    }
}

impl Animate for Vec2Animation {
    fn step(&mut self, delta: f64) -> bool {
        self.elapsed += delta;
        // Clamp so the final write lands exactly on the end point; the
        // elastic curve still swings outside [0, 1] mid-flight.
        let t = if self.elapsed >= self.duration {
            1.0
        } else {
            self.elapsed / self.duration
        };
        let progress = ease_out_elastic(t) as f32;
        self.target.set(self.start + self.dir * (self.length * progress));
        self.elapsed >= self.duration
    }
}
