use crate::error::ForceError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration for the integrator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct IntegratorConfig {
    /// Upper bound on the length of the velocity after each tick.
    /// Default: none (unbounded)
    pub velocity_max: Option<f32>,
}

impl IntegratorConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum velocity magnitude.
    pub fn with_velocity_max(mut self, velocity_max: f32) -> Self {
        self.velocity_max = Some(velocity_max);
        self
    }

    /// Checks that the configured values are usable
    pub fn validate(&self) -> Result<()> {
        match self.velocity_max {
            Some(max) if !max.is_finite() || max < 0.0 => Err(ForceError::InvalidParameter(
                format!("velocity_max must be finite and non-negative, got {max}"),
            )),
            _ => Ok(()),
        }
    }
}
