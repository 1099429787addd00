use crate::forces::{mass_apply_accel, Force, MassMode};
use crate::integration::compute_velocity;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Parameters for a spring pinned at one end
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpringOptions {
    /// The length of the spring at rest. Default: 0.5
    pub resting_length: f32,

    /// The spring stiffness coefficient. Default: 0.0002
    pub stiffness: f32,

    /// Velocity multiplier applied every tick. Default: 0.999
    pub damping: f32,
}

impl SpringOptions {
    pub fn new() -> Self {
        Self {
            resting_length: 0.5,
            stiffness: 0.0002,
            damping: 0.999,
        }
    }

    /// Sets the spring rest length
    pub fn with_resting_length(mut self, resting_length: f32) -> Self {
        self.resting_length = resting_length;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A damped spring with one end pinned at `pinned_at` and the thing on the
/// other end.
///
/// Unlike accumulating forces, the spring integrates its own pull into the
/// velocity, damps it, and clears the acceleration accumulator. Anything
/// accumulated by earlier forces in the same tick is folded into that
/// velocity. Position is still integrated afterwards by
/// [`apply`](crate::integration::apply).
///
/// The stretch is taken as `|resting_length - length|`, so the pull always
/// points towards the pin, whether the spring is stretched or compressed.
pub fn spring_force(pinned_at: Vector2, opts: SpringOptions) -> Force {
    Force::state_override(move |thing| {
        let dir = thing.get_position().unwrap_or_default() - pinned_at;
        let mag = dir.length();
        let stretch = (opts.resting_length - mag).abs();

        let f = dir.normalize() * (-opts.stiffness * stretch);
        let accel = mass_apply_accel(f, &thing, MassMode::Dampen);
        let velo = compute_velocity(accel, thing.get_velocity().unwrap_or_default(), None);

        Ok(thing
            .with_velocity(velo * opts.damping)
            .with_acceleration(Vector2::zero()))
    })
}
