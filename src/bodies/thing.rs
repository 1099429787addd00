use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A point-like entity moved around by forces.
///
/// Every field is optional. Forces read unset vectors as zero, unset angular
/// fields as zero and an unset mass as 1.
///
/// A `Thing` is a value: it has no setters, only consuming `with_*` methods
/// that return an updated copy. Each simulation tick therefore produces a new
/// `Thing` which the caller stores for the next tick.
///
/// `acceleration` and `angular_acceleration` are per-tick accumulators. Forces
/// add to them while a tick is being folded and the integrator resets them to
/// zero afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default, rename_all = "camelCase"))]
pub struct Thing {
    position: Option<Vector2>,
    velocity: Option<Vector2>,
    acceleration: Option<Vector2>,
    mass: Option<f32>,
    angle: Option<f32>,
    angular_velocity: Option<f32>,
    angular_acceleration: Option<f32>,
}

impl Thing {
    /// Creates a thing with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a thing at the given position
    pub fn at(position: Vector2) -> Self {
        Self::new().with_position(position)
    }

    /// Returns the position, if set
    pub fn get_position(&self) -> Option<Vector2> {
        self.position
    }

    /// Returns the velocity, if set
    pub fn get_velocity(&self) -> Option<Vector2> {
        self.velocity
    }

    /// Returns the acceleration accumulator, if set
    pub fn get_acceleration(&self) -> Option<Vector2> {
        self.acceleration
    }

    /// Returns the mass, reading an unset mass as 1
    pub fn get_mass(&self) -> f32 {
        self.mass.unwrap_or(1.0)
    }

    /// Returns true if a mass was explicitly given
    pub fn has_mass(&self) -> bool {
        self.mass.is_some()
    }

    /// Returns the angle in radians, if set
    pub fn get_angle(&self) -> Option<f32> {
        self.angle
    }

    /// Returns the angular velocity, if set
    pub fn get_angular_velocity(&self) -> Option<f32> {
        self.angular_velocity
    }

    /// Returns the angular acceleration accumulator, if set
    pub fn get_angular_acceleration(&self) -> Option<f32> {
        self.angular_acceleration
    }

    pub fn with_position(self, position: Vector2) -> Self {
        Self { position: Some(position), ..self }
    }

    pub fn with_velocity(self, velocity: Vector2) -> Self {
        Self { velocity: Some(velocity), ..self }
    }

    pub fn with_acceleration(self, acceleration: Vector2) -> Self {
        Self { acceleration: Some(acceleration), ..self }
    }

    pub fn with_mass(self, mass: f32) -> Self {
        Self { mass: Some(mass), ..self }
    }

    pub fn with_angle(self, angle: f32) -> Self {
        Self { angle: Some(angle), ..self }
    }

    pub fn with_angular_velocity(self, angular_velocity: f32) -> Self {
        Self { angular_velocity: Some(angular_velocity), ..self }
    }

    pub fn with_angular_acceleration(self, angular_acceleration: f32) -> Self {
        Self { angular_acceleration: Some(angular_acceleration), ..self }
    }
}
