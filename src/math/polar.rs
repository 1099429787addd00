use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A point expressed as a distance and angle around some origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Polar {
    /// Distance from the origin
    pub distance: f32,

    /// Angle in radians, measured from the positive x axis
    pub angle: f32,
}

impl Polar {
    /// Creates a new polar coordinate
    #[inline]
    pub fn new(distance: f32, angle: f32) -> Self {
        Self { distance, angle }
    }

    /// Converts a Cartesian `point` into polar form relative to `origin`
    pub fn from_cartesian(point: Vector2, origin: Vector2) -> Self {
        let offset = point - origin;
        Self {
            distance: offset.length(),
            angle: offset.angle(),
        }
    }

    /// Converts back to a Cartesian point relative to `origin`
    pub fn to_cartesian(&self, origin: Vector2) -> Vector2 {
        Vector2::new(
            origin.x + self.distance * self.angle.cos(),
            origin.y + self.distance * self.angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_to_cartesian_offsets_from_origin() {
        let p = Polar::new(2.0, FRAC_PI_2).to_cartesian(Vector2::new(1.0, 1.0));
        assert_relative_eq!(p, Vector2::new(1.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_from_cartesian_inverts_to_cartesian() {
        let origin = Vector2::new(0.5, -0.25);
        let point = Vector2::new(-1.0, 2.0);
        let polar = Polar::from_cartesian(point, origin);
        assert_relative_eq!(polar.to_cartesian(origin), point, epsilon = 1e-5);
    }
}
