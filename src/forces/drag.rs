use crate::forces::{mass_apply_accel, Force, MassMode};

/// Linear drag: pushes against the velocity in proportion to it.
///
/// The contribution is `-velocity * force`, scaled by mass per `mode`.
/// Things without a velocity are returned unchanged.
pub fn velocity_force(force: f32, mode: MassMode) -> Force {
    Force::accumulate(move |thing| {
        let Some(velocity) = thing.get_velocity() else {
            return Ok(thing);
        };

        let drag = -velocity * force;
        Ok(thing.with_acceleration(mass_apply_accel(drag, &thing, mode)))
    })
}

/// Quadratic-style drag.
///
/// The magnitude is `force * |normalize(velocity)|²`. Because the velocity is
/// normalised before squaring, the squared term is 1 for any moving thing
/// (and 0 for one at rest), so this behaves like a linear drag of strength
/// `force`. Things without a velocity are returned unchanged.
pub fn magnitude_force(force: f32, mode: MassMode) -> Force {
    Force::accumulate(move |thing| {
        let Some(velocity) = thing.get_velocity() else {
            return Ok(thing);
        };

        let unit_length = velocity.normalize().length();
        let magnitude = force * unit_length * unit_length;
        let drag = -velocity * magnitude;
        Ok(thing.with_acceleration(mass_apply_accel(drag, &thing, mode)))
    })
}
