use crate::bodies::Thing;
use crate::forces::Force;
use crate::integration::compute_position_from_angle;
use crate::math::Vector2;
use std::f32::consts::FRAC_PI_2;
use tracing::debug;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Parameters for a pendulum swinging from a pin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PendulumOptions {
    /// Length of the rod. When unset, the distance from the pin to the
    /// thing's position is used each tick
    pub length: Option<f32>,

    /// Swing speed. Default: 0.001
    pub speed: f32,

    /// Angular velocity multiplier applied every tick. Default: 0.995
    pub damping: f32,
}

impl PendulumOptions {
    pub fn new() -> Self {
        Self {
            length: None,
            speed: 0.001,
            damping: 0.995,
        }
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }
}

impl Default for PendulumOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Default pin for [`pendulum_force`]: top centre of a unit canvas
pub const DEFAULT_PENDULUM_PIN: Vector2 = Vector2 { x: 0.5, y: 0.0 };

/// A simple pendulum hanging from `pinned_at`.
///
/// An angle of 0 hangs straight down (+y). If the thing has no angle yet, one
/// is derived from its position relative to the pin.
///
/// The force replaces the thing entirely: the returned thing carries only
/// `angle`, `angular_velocity` and `position`. Any velocity, mass or
/// accumulated acceleration on the input is dropped.
pub fn pendulum_force(pinned_at: Vector2, opts: PendulumOptions) -> Force {
    Force::state_override(move |thing| {
        let length = opts
            .length
            .unwrap_or_else(|| pinned_at.distance(&thing.get_position().unwrap_or_default()));

        let angle = match (thing.get_angle(), thing.get_position()) {
            (Some(angle), _) => angle,
            (None, Some(position)) => {
                debug!(%position, "deriving pendulum angle from position");
                pinned_at.angle_to(&position) - FRAC_PI_2
            }
            (None, None) => 0.0,
        };

        let angular_accel = (-opts.speed / length) * angle.sin();
        let v = thing.get_angular_velocity().unwrap_or(0.0) + angular_accel;
        let angle = angle + v;

        Ok(Thing::new()
            .with_angular_velocity(v * opts.damping)
            .with_angle(angle)
            .with_position(compute_position_from_angle(length, angle + FRAC_PI_2, pinned_at)))
    })
}
