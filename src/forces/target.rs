use crate::error::ForceError;
use crate::forces::Force;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Options for steering a thing towards a target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TargetOptions {
    /// Scale applied to the raw offset to the target. Default: 0.001
    pub diminish_by: f32,

    /// Dead-zone around the target. When the thing is closer than this on
    /// both axes no acceleration is produced. Default: none
    pub range: Option<Vector2>,
}

impl TargetOptions {
    pub fn new() -> Self {
        Self {
            diminish_by: 0.001,
            range: None,
        }
    }

    pub fn with_diminish_by(mut self, diminish_by: f32) -> Self {
        self.diminish_by = diminish_by;
        self
    }

    pub fn with_range(mut self, range: Vector2) -> Self {
        self.range = Some(range);
        self
    }
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the acceleration that moves `current` towards `target`
pub fn compute_acceleration_to_target(target: Vector2, current: Vector2, opts: &TargetOptions) -> Vector2 {
    let direction = target - current;

    if let Some(range) = opts.range {
        let distance = direction.abs();
        if distance.x < range.x && distance.y < range.y {
            return Vector2::zero();
        }
    }

    direction * opts.diminish_by
}

/// A force steering a thing towards `target`.
///
/// Fails with [`ForceError::MissingField`] for things without a position.
pub fn target_force(target: Vector2, opts: TargetOptions) -> Force {
    Force::accumulate(move |thing| {
        let position = thing.get_position().ok_or(ForceError::MissingField {
            name: "thing",
            field: "position",
        })?;

        let accel = compute_acceleration_to_target(target, position, &opts);
        let acceleration = thing.get_acceleration().unwrap_or_default() + accel;
        Ok(thing.with_acceleration(acceleration))
    })
}
