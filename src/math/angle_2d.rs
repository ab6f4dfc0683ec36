use std::f64::consts::PI;

use super::Point2;

/// Returns the absolute heading of the direction from `from` to `to`,
/// as `atan2(dy, dx)` in the range `(-π, π]`.
#[must_use]
pub fn heading(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Maps an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(theta: f64) -> f64 {
    let t = theta.rem_euclid(2.0 * PI);
    // rem_euclid can return 2π for tiny negative inputs after rounding.
    if t >= 2.0 * PI {
        t - 2.0 * PI
    } else {
        t
    }
}
