//! Settings-panel parameters
//!
//! The panel feeds four values into the game. Values arrive from range and
//! checkbox inputs as strings, so parsing tolerates garbage by falling back
//! to defaults. Nothing is persisted between runs.

use crate::consts;

/// Parameters chosen on the settings panel before a run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Whether the position button scatters the boxes.
    pub position_effects: bool,
    /// Reserved: the sound button does nothing yet.
    pub sound_effects: bool,
    /// Number of background boxes.
    pub box_count: u32,
    /// Animation speed multiplier; durations are divided by this.
    pub speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            position_effects: true,
            sound_effects: true,
            box_count: 8,
            speed: 1.0,
        }
    }
}

impl Settings {
    /// Builds settings from raw panel input values. The sliders report raw
    /// strings; the speed slider's raw value is scaled by 0.1, so a slider
    /// at 10 means 1.0x.
    pub fn from_panel(position: bool, sound: bool, box_count_raw: &str, speed_raw: &str) -> Self {
        let defaults = Self::default();
        let box_count = box_count_raw
            .trim()
            .parse::<u32>()
            .unwrap_or(defaults.box_count);
        let speed = speed_raw
            .trim()
            .parse::<f64>()
            .map(|v| v * 0.1)
            .unwrap_or(defaults.speed);

        Self {
            position_effects: position,
            sound_effects: sound,
            box_count,
            speed,
        }
        .sanitize()
    }

    /// Clamps values into ranges the engine can handle.
    pub fn sanitize(mut self) -> Self {
        self.box_count = self.box_count.clamp(1, consts::MAX_BOX_COUNT);
        self.speed = if self.speed.is_finite() {
            self.speed.clamp(0.1, 4.0)
        } else {
            1.0
        };
        self
    }

    /// Display string for the speed slider readout (one decimal).
    pub fn speed_label(&self) -> String {
        format!("{:.1}", self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_panel_parses_sliders() {
        let s = Settings::from_panel(true, false, "12", "15");
        assert_eq!(s.box_count, 12);
        assert!((s.speed - 1.5).abs() < 1e-9);
        assert!(s.position_effects);
        assert!(!s.sound_effects);
    }

    #[test]
    fn test_from_panel_garbage_falls_back() {
        let s = Settings::from_panel(true, true, "many", "");
        assert_eq!(s.box_count, Settings::default().box_count);
        assert_eq!(s.speed, Settings::default().speed);
    }

    #[test]
    fn test_sanitize_clamps() {
        let s = Settings {
            box_count: 0,
            speed: 100.0,
            ..Default::default()
        }
        .sanitize();
        assert_eq!(s.box_count, 1);
        assert_eq!(s.speed, 4.0);

        let s = Settings {
            box_count: 10_000,
            speed: f64::NAN,
            ..Default::default()
        }
        .sanitize();
        assert_eq!(s.box_count, consts::MAX_BOX_COUNT);
        assert_eq!(s.speed, 1.0);
    }

    #[test]
    fn test_speed_label() {
        assert_eq!(Settings::default().speed_label(), "1.0");
    }
}
