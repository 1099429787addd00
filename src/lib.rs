//! Composable 2D forces for animating point-like things.
//!
//! A [`Thing`] is advanced one tick at a time by [`apply`], which folds a list
//! of [`Force`]s over it, integrates the accumulated acceleration into
//! velocity and the velocity into position, then clears the accumulator.
//!
//! ```
//! use affect_forces::{apply, forces::{acceleration_force, MassMode}, Thing, Vector2};
//!
//! let wind = acceleration_force(Vector2::new(0.1, 0.0), MassMode::Ignored);
//! let thing = Thing::at(Vector2::zero()).with_velocity(Vector2::zero());
//!
//! let thing = apply(thing, [wind]).unwrap();
//! assert_eq!(thing.get_position(), Some(Vector2::new(0.1, 0.0)));
//! assert_eq!(thing.get_acceleration(), Some(Vector2::zero()));
//! ```

pub mod math;
pub mod bodies;
pub mod forces;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::bodies::{guard, Thing, ThingId};
pub use crate::forces::{Force, ForceFn, ForceKind, MassMode};
pub use crate::integration::{apply, apply_with, ForceSet, IntegratorConfig};
pub use crate::math::Vector2;

/// Error types for the force library
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum ForceError {
        #[error("{name} is missing")]
        MissingThing { name: &'static str },

        #[error("{name}.{field} not set")]
        MissingField { name: &'static str, field: &'static str },

        #[error("Unknown mass mode '{0}'. Expected 'dampen', 'multiply' or 'ignored'")]
        UnknownMassMode(String),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for force operations
pub type Result<T> = std::result::Result<T, error::ForceError>;

