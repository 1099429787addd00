use crate::bodies::Thing;
use crate::error::ForceError;
use crate::math::Vector2;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a thing's mass scales a force before it is accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum MassMode {
    /// Mass is not considered
    #[default]
    Ignored,

    /// Force is divided by mass, so heavier things accelerate less (a = F/m)
    Dampen,

    /// Force is multiplied by mass, so heavier things accelerate more.
    /// Not physical, but useful for accenting motion.
    Multiply,
}

impl MassMode {
    /// Scales `vector` by `mass` according to this mode
    pub fn scale(self, vector: Vector2, mass: f32) -> Vector2 {
        match self {
            Self::Ignored => vector,
            Self::Dampen => vector.div_components(&Vector2::new(mass, mass)),
            Self::Multiply => vector.mul_components(&Vector2::new(mass, mass)),
        }
    }
}

impl FromStr for MassMode {
    type Err = ForceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignored" => Ok(Self::Ignored),
            "dampen" => Ok(Self::Dampen),
            "multiply" => Ok(Self::Multiply),
            other => {
                warn!(mode = other, "rejecting unknown mass mode");
                Err(ForceError::UnknownMassMode(other.to_string()))
            }
        }
    }
}

impl fmt::Display for MassMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Ignored => "ignored",
            Self::Dampen => "dampen",
            Self::Multiply => "multiply",
        })
    }
}

/// Returns `thing`'s acceleration with `vector` added after scaling it by the
/// thing's mass according to `mode`.
///
/// An unset mass reads as 1 and an unset acceleration as zero. `thing` itself
/// is not changed.
pub fn mass_apply_accel(vector: Vector2, thing: &Thing, mode: MassMode) -> Vector2 {
    let contribution = mode.scale(vector, thing.get_mass());
    thing.get_acceleration().unwrap_or_default() + contribution
}
