mod vector;
mod polar;

pub use vector::Vector2;
pub use polar::Polar;

use std::f32::consts::{PI, TAU};

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linearly interpolates between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Wraps an angle into `[0, 2π)`
#[inline]
pub fn wrap_angle(radians: f32) -> f32 {
    radians.rem_euclid(TAU)
}

/// Interpolates from one angle towards another by `amount`, travelling the
/// shorter way around the circle.
///
/// An `amount` of 0 yields `from`, 1 yields an angle equivalent to `to`
/// (possibly offset by a full turn).
pub fn interpolate_angle(amount: f32, from: f32, to: f32) -> f32 {
    let delta = wrap_angle(to - from);
    let shortest = if delta > PI { delta - TAU } else { delta };
    lerp(from, from + shortest, amount)
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_angle_takes_short_way_across_zero() {
        // 350° → 10° should pass through 0°, not 180°
        let from = to_radians(350.0);
        let to = to_radians(10.0);
        let mid = interpolate_angle(0.5, from, to);
        assert_relative_eq!(mid.cos(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(mid.sin(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_interpolate_angle_endpoints() {
        assert_relative_eq!(interpolate_angle(0.0, 1.0, 2.0), 1.0);
        assert_relative_eq!(interpolate_angle(1.0, 1.0, 2.0), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_angle_negative() {
        assert_relative_eq!(wrap_angle(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-6);
    }
}
