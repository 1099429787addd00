use crate::forces::{mass_apply_accel, Force, MassMode};
use crate::math::Vector2;

/// A force that adds a constant, mass-scaled vector to the accumulator.
///
/// Suits uniform fields such as wind or gravity.
///
/// ```
/// use affect_forces::forces::{acceleration_force, MassMode};
/// use affect_forces::Vector2;
///
/// let gravity = acceleration_force(Vector2::new(0.0, 0.01), MassMode::Ignored);
/// let wind = acceleration_force(Vector2::new(0.01, 0.0), MassMode::Dampen);
/// ```
pub fn acceleration_force(vector: Vector2, mode: MassMode) -> Force {
    Force::accumulate(move |thing| {
        Ok(thing.with_acceleration(mass_apply_accel(vector, &thing, mode)))
    })
}
