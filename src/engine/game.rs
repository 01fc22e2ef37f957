//! The frame loop
//!
//! `Game` owns the canonical drawable and animation lists and advances the
//! whole toy by the wall-clock delta the caller hands it each frame. The
//! caller owns scheduling: requestAnimationFrame on the web, a plain loop
//! natively. Once `end()` drops the active flag, `frame` is a no-op and the
//! scheduling chain dies on its own.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::animation::{Animation, StringAnimation, Vec2Animation};
use super::entity::{BackgroundBox, Drawable, Text};
use super::surface::Surface;
use crate::consts;
use crate::settings::Settings;

pub struct Game {
    width: f32,
    height: f32,
    active: bool,
    last_draw_time: Option<f64>,
    settings: Settings,
    rng: Pcg32,

    drawables: Vec<Box<dyn Drawable>>,
    animations: Vec<Animation>,
    /// Clones of the boxes in `drawables`; kept so `position_click` can
    /// retarget their position slots.
    boxes: Vec<BackgroundBox>,
}

impl Game {
    pub fn new(width: f32, height: f32, settings: Settings, seed: u64) -> Self {
        Self {
            width,
            height,
            active: false,
            last_draw_time: None,
            settings,
            rng: Pcg32::seed_from_u64(seed),
            drawables: Vec::new(),
            animations: Vec::new(),
            boxes: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Populates the box grid and the countdown, then arms the frame loop.
    pub fn start(&mut self) {
        self.spawn_box_grid();
        self.spawn_countdown();
        self.last_draw_time = None;
        self.active = true;
        log::info!(
            "game started: {} boxes, {:.0}x{:.0}",
            self.boxes.len(),
            self.width,
            self.height
        );
    }

    /// Stops the toy. In-flight property values stay as-is; the next
    /// scheduled frame sees the inactive flag and the chain stops.
    pub fn end(&mut self) {
        self.active = false;
        self.drawables.clear();
        self.animations.clear();
        self.boxes.clear();
        log::info!("game ended");
    }

    /// Advances the toy by one frame and renders it.
    ///
    /// The first frame after `start()` runs with a zero delta so a stale
    /// clock cannot cause a jump. Animation and drawable lists are stepped
    /// as snapshots; anything enqueued by completion callbacks joins the
    /// next frame.
    pub fn frame(&mut self, now: f64, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }

        let delta = match self.last_draw_time {
            Some(last) => now - last,
            None => 0.0,
        };

        // Reset.
        surface.clear();
        surface.set_font(consts::BASE_FONT_PX);
        surface.set_fill(consts::INK);

        // Step animations over a snapshot; drop the completed ones.
        let mut animations = std::mem::take(&mut self.animations);
        for anim in &mut animations {
            anim.managed_step(delta);
        }
        animations.retain(|a| !a.is_complete());
        animations.append(&mut self.animations);
        self.animations = animations;

        // Draw the living, drop the dead without drawing.
        let mut drawables = std::mem::take(&mut self.drawables);
        drawables.retain(|d| {
            if d.alive() {
                d.draw(surface);
                true
            } else {
                false
            }
        });
        drawables.append(&mut self.drawables);
        self.drawables = drawables;

        self.last_draw_time = Some(now);
    }

    /// Sends every box to an independent random point on the canvas over an
    /// independent random duration.
    pub fn position_click(&mut self) {
        if !self.settings.position_effects {
            log::debug!("position effects disabled");
            return;
        }

        for b in &self.boxes {
            let end = Vec2::new(
                self.rng.random_range(0.0..self.width),
                self.rng.random_range(0.0..self.height),
            );
            let duration = self
                .rng
                .random_range(consts::MOVE_DURATION_MIN_MS..consts::MOVE_DURATION_MAX_MS)
                / self.settings.speed;
            self.animations
                .push(Animation::new(Vec2Animation::new(b.position(), end, duration)));
        }
        log::debug!("scattered {} boxes", self.boxes.len());
    }

    /// Reserved extension point.
    pub fn sound_click(&mut self) {
        log::debug!("sound not implemented");
    }

    /// Lays `box_count` boxes out in a centered square-ish grid.
    fn spawn_box_grid(&mut self) {
        let n = self.settings.box_count;
        let cols = (n as f32).sqrt().ceil().max(1.0) as u32;
        let rows = n.div_ceil(cols);
        let pitch = consts::BOX_SIZE + consts::BOX_GAP;
        let origin = Vec2::new(
            self.width / 2.0 - (cols as f32 - 1.0) * pitch / 2.0,
            self.height / 2.0 - (rows as f32 - 1.0) * pitch / 2.0,
        );

        for i in 0..n {
            let col = i % cols;
            let row = i / cols;
            let pos = origin + Vec2::new(col as f32 * pitch, row as f32 * pitch);
            let b = BackgroundBox::new(pos, consts::BOX_SIZE);
            self.boxes.push(b.clone());
            self.drawables.push(Box::new(b));
        }
    }

    /// One Text drawable driven by a chain of StringAnimations: each digit
    /// waits for the previous one, and the final link removes the text.
    fn spawn_countdown(&mut self) {
        let text = Text::new(Vec2::new(self.width / 2.0, self.height / 2.0), "");
        let message = text.message();
        let step_ms = consts::COUNTDOWN_STEP_MS / self.settings.speed;

        let mut prev = None;
        for digit in (1..=consts::COUNTDOWN_START).rev() {
            let mut anim = Animation::new(StringAnimation::new(
                message.clone(),
                digit.to_string(),
                step_ms,
            ));
            if let Some(handle) = prev {
                anim.depends_on(handle);
            }
            if digit == 1 {
                let alive = text.remove_handle();
                anim.on_complete(move || alive.kill());
            }
            prev = Some(anim.handle());
            self.animations.push(anim);
        }

        self.drawables.push(Box::new(text));
    }

    #[cfg(test)]
    fn counts(&self) -> (usize, usize) {
        (self.drawables.len(), self.animations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::AnimState;
    use crate::platform::headless::NullSurface;

    fn game_with(settings: Settings) -> Game {
        let mut game = Game::new(800.0, 600.0, settings, 42);
        game.start();
        game
    }

    fn default_game() -> Game {
        game_with(Settings::default())
    }

    #[test]
    fn test_start_populates_boxes_and_countdown() {
        let game = default_game();
        let (drawables, animations) = game.counts();
        assert_eq!(drawables, 8 + 1); // boxes + countdown text
        assert_eq!(animations, 3); // 3 -> 2 -> 1
        assert!(game.is_active());
    }

    #[test]
    fn test_first_frame_uses_zero_delta() {
        let mut game = default_game();
        let mut surface = NullSurface::new();

        // A huge `now` on the first frame must not burn countdown time.
        game.frame(1_000_000.0, &mut surface);
        let (_, animations) = game.counts();
        assert_eq!(animations, 3, "no animation may complete on the first frame");
    }

    #[test]
    fn test_countdown_chain_scenario() {
        let mut game = default_game();
        let mut surface = NullSurface::new();
        let text_alive = |g: &Game| g.counts().0 == 9;

        game.frame(0.0, &mut surface); // delta 0: chain head activates
        game.frame(1000.0, &mut surface); // "3" completes, "2" activates
        assert!(text_alive(&game), "text must survive the first step");
        game.frame(2000.0, &mut surface); // "2" completes, "1" activates
        assert!(text_alive(&game), "text must survive the second step");
        game.frame(3000.0, &mut surface); // "1" completes, text removed
        assert!(!text_alive(&game), "text must be gone after the chain ends");
        game.frame(4000.0, &mut surface);
        assert!(!text_alive(&game));

        let (_, animations) = game.counts();
        assert_eq!(animations, 0);
    }

    #[test]
    fn test_no_dead_drawables_or_complete_animations_survive() {
        let mut game = default_game();
        let mut surface = NullSurface::new();
        game.position_click();

        let mut now = 0.0;
        for _ in 0..40 {
            game.frame(now, &mut surface);
            now += 137.0;
            assert!(game.animations.iter().all(|a| !a.is_complete()));
            assert!(game.drawables.iter().all(|d| d.alive()));
        }
        // Everything has run its course by now.
        assert_eq!(game.counts().1, 0);
    }

    #[test]
    fn test_position_click_enqueues_one_animation_per_box() {
        let mut game = game_with(Settings {
            box_count: 5,
            ..Default::default()
        });
        let before = game.counts().1;
        game.position_click();
        assert_eq!(game.counts().1, before + 5);
    }

    #[test]
    fn test_position_click_respects_setting() {
        let mut game = game_with(Settings {
            position_effects: false,
            ..Default::default()
        });
        let before = game.counts().1;
        game.position_click();
        assert_eq!(game.counts().1, before);
    }

    #[test]
    fn test_position_click_targets_stay_in_bounds() {
        let mut game = default_game();
        let mut surface = NullSurface::new();
        game.frame(0.0, &mut surface);
        game.position_click();

        // Durations are sampled from [1000, 2000): nothing may finish within
        // 999ms of stepping, everything must be done well before 12s.
        game.frame(999.0, &mut surface);
        assert_eq!(game.counts().1, 3 + 8, "no move may complete before 1000ms");

        for i in 2..=12 {
            game.frame(i as f64 * 1000.0, &mut surface);
        }
        assert_eq!(game.counts().1, 0);

        // Small tolerance: the final write is start + dir * length, which
        // reconstructs the sampled end point to within float rounding.
        for b in &game.boxes {
            let p = b.position().get();
            assert!(p.x > -0.01 && p.x < 800.01, "x out of bounds: {p:?}");
            assert!(p.y > -0.01 && p.y < 600.01, "y out of bounds: {p:?}");
        }
    }

    #[test]
    fn test_position_click_is_deterministic_for_a_seed() {
        let run = |seed: u64| {
            let mut game = Game::new(800.0, 600.0, Settings::default(), seed);
            game.start();
            let mut surface = NullSurface::new();
            game.frame(0.0, &mut surface);
            game.position_click();
            for i in 1..=6 {
                game.frame(i as f64 * 1000.0, &mut surface);
            }
            game.boxes.iter().map(|b| b.position().get()).collect::<Vec<_>>()
        };

        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn test_frame_is_noop_when_inactive() {
        let mut game = default_game();
        let mut surface = NullSurface::new();
        game.frame(0.0, &mut surface);
        game.end();
        assert!(!game.is_active());
        assert_eq!(game.counts(), (0, 0));

        game.frame(100.0, &mut surface);
        assert_eq!(game.counts(), (0, 0));
    }

    #[test]
    fn test_speed_setting_scales_countdown() {
        let mut game = game_with(Settings {
            speed: 2.0,
            ..Default::default()
        });
        let mut surface = NullSurface::new();

        // At 2x, each digit lasts 500ms; the whole chain fits in 1.5s.
        game.frame(0.0, &mut surface);
        game.frame(500.0, &mut surface);
        game.frame(1000.0, &mut surface);
        game.frame(1500.0, &mut surface);
        game.frame(1600.0, &mut surface);
        assert_eq!(game.counts(), (8, 0), "countdown should be fully done");
    }

    #[test]
    fn test_restart_after_end() {
        let mut game = default_game();
        game.end();
        game.start();
        assert_eq!(game.counts(), (9, 3));
        assert!(game.is_active());
    }

    #[test]
    fn test_animation_states_progress_in_order() {
        let mut game = default_game();
        let mut surface = NullSurface::new();
        game.frame(0.0, &mut surface);

        let states: Vec<_> = game.animations.iter().map(|a| a.state()).collect();
        assert_eq!(
            states,
            vec![AnimState::InProgress, AnimState::Pending, AnimState::Pending]
        );
    }
}
