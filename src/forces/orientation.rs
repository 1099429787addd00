use crate::forces::{compose, Force};
use crate::math::interpolate_angle;

/// Integrates the rotational fields, the angular counterpart of
/// [`apply`](crate::integration::apply).
///
/// `angular_velocity += angular_acceleration`, `angle += angular_velocity`,
/// then the angular accumulator is reset to 0. Unset fields read as 0.
pub fn angular_force() -> Force {
    Force::accumulate(|thing| {
        let accumulator = thing.get_angular_acceleration().unwrap_or(0.0);
        let v = thing.get_angular_velocity().unwrap_or(0.0) + accumulator;
        let angle = thing.get_angle().unwrap_or(0.0) + v;

        Ok(thing
            .with_angle(angle)
            .with_angular_velocity(v)
            .with_angular_acceleration(0.0))
    })
}

/// Sets angular acceleration from horizontal acceleration, so things lean
/// into sideways pushes. Replaces any previous angular acceleration.
pub fn angle_from_acceleration_force(scaling: f32) -> Force {
    Force::accumulate(move |thing| {
        let accel = thing.get_acceleration().unwrap_or_default();
        Ok(thing.with_angular_acceleration(accel.x * scaling))
    })
}

/// Turns a thing to face the direction it is moving.
///
/// With `interpolate_amt` below 1 the angle eases from its current value
/// (0 if unset) towards the heading, along the shorter arc. At 1 or above it
/// snaps to the heading. Things without a velocity are returned unchanged.
pub fn angle_from_velocity_force(interpolate_amt: f32) -> Force {
    Force::accumulate(move |thing| {
        let Some(velocity) = thing.get_velocity() else {
            return Ok(thing);
        };

        let heading = velocity.angle();
        let angle = if interpolate_amt < 1.0 {
            interpolate_angle(interpolate_amt, thing.get_angle().unwrap_or(0.0), heading)
        } else {
            heading
        };
        Ok(thing.with_angle(angle))
    })
}

/// Orients a thing from its motion.
///
/// Runs, in order, [`angular_force`], [`angle_from_acceleration_force`] with
/// the default scaling of 20, then [`angle_from_velocity_force`] with
/// `interpolate_amt`.
pub fn orientation_force(interpolate_amt: f32) -> Force {
    compose([
        angular_force(),
        angle_from_acceleration_force(20.0),
        angle_from_velocity_force(interpolate_amt),
    ])
}
