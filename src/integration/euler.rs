use crate::math::{Polar, Vector2};

/// Semi-implicit Euler velocity step with an implicit unit timestep.
///
/// Returns `velocity + acceleration`, scaled down to `velocity_max` if given.
pub fn compute_velocity(acceleration: Vector2, velocity: Vector2, velocity_max: Option<f32>) -> Vector2 {
    let velocity = velocity + acceleration;
    match velocity_max {
        Some(max) => velocity.clamp_magnitude(max),
        None => velocity,
    }
}

/// Position step: `position + velocity`
pub fn compute_position_from_velocity(position: Vector2, velocity: Vector2) -> Vector2 {
    position + velocity
}

/// Returns the point `distance` away from `origin` in direction `angle` (radians)
pub fn compute_position_from_angle(distance: f32, angle: f32, origin: Vector2) -> Vector2 {
    Polar::new(distance, angle).to_cartesian(origin)
}
