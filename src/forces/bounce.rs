use crate::forces::Force;
use crate::integration::compute_position_from_velocity;
use crate::math::Vector2;
use tracing::debug;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rectangle anchored at the origin that things are kept inside
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Reflects `value` off the `[0, max]` interval, returning the clamped value
/// and the velocity component after the bounce
fn bounce_axis(value: f32, velocity: f32, max: f32, dampen: f32) -> (f32, f32) {
    if value > max {
        (max, -velocity * dampen)
    } else if value < 0.0 {
        (0.0, -velocity * dampen)
    } else {
        (value, velocity)
    }
}

/// Keeps a thing inside `bounds`, bouncing it off the edges.
///
/// The next position is computed from the current velocity. On any axis where
/// it leaves the bounds it is clamped to the edge and that velocity component
/// is reversed and multiplied by `dampen`. Values below 1 lose energy on each
/// bounce, values above 1 gain it.
///
/// The returned thing carries the resolved position and velocity for the tick.
pub fn constrain_bounce(bounds: Bounds, dampen: f32) -> Force {
    Force::state_override(move |thing| {
        let velocity = thing.get_velocity().unwrap_or_default();
        let next = compute_position_from_velocity(thing.get_position().unwrap_or_default(), velocity);

        let (x, vx) = bounce_axis(next.x, velocity.x, bounds.width, dampen);
        let (y, vy) = bounce_axis(next.y, velocity.y, bounds.height, dampen);

        if x != next.x || y != next.y {
            debug!(x, y, vx, vy, "bounced off bounds");
        }

        Ok(thing
            .with_position(Vector2::new(x, y))
            .with_velocity(Vector2::new(vx, vy)))
    })
}
