//! Easing curves for animation progress

use std::f64::consts::PI;

/// Elastic ease-out: springs past the target and settles back.
///
/// Maps normalized time `t` in `[0, 1]` to a progress value. The curve
/// overshoots above and below `[0, 1]` inside the interval; endpoints are
/// exact (`0` at or below 0, `1` at or above 1), so a finished animation
/// lands precisely on its end value.
pub fn ease_out_elastic(t: f64) -> f64 {
    const C4: f64 = (2.0 * PI) / 3.0;

    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        (2.0f64).powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
    }
}
