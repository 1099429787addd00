use crate::bodies::Thing;
use crate::math::Vector2;
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A function that takes a thing and returns its affected successor
pub type ForceFn = Arc<dyn Fn(Thing) -> Result<Thing> + Send + Sync>;

/// How a force participates in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceKind {
    /// A constant vector added straight to the acceleration accumulator
    Constant,

    /// A function that only adds to `acceleration` / `angular_acceleration`,
    /// leaving integration to the integrator
    Accumulator,

    /// A function that computes velocity, position or angle itself
    /// (springs, pendulums, boundary bounce)
    StateOverride,
}

/// Something that affects a [`Thing`] during a tick.
///
/// Forces are cheap to clone and can be shared between threads.
#[derive(Clone)]
pub enum Force {
    /// Added as-is to the acceleration accumulator
    Constant(Vector2),

    /// Contributes to the accumulator only
    Accumulate(ForceFn),

    /// Writes velocity, position or angle directly
    Override(ForceFn),
}

impl Force {
    /// Wraps a closure as an accumulating force
    pub fn accumulate<F>(f: F) -> Self
    where
        F: Fn(Thing) -> Result<Thing> + Send + Sync + 'static,
    {
        Self::Accumulate(Arc::new(f))
    }

    /// Wraps a closure as a state-overriding force
    pub fn state_override<F>(f: F) -> Self
    where
        F: Fn(Thing) -> Result<Thing> + Send + Sync + 'static,
    {
        Self::Override(Arc::new(f))
    }

    /// Returns which category this force belongs to
    pub fn kind(&self) -> ForceKind {
        match self {
            Self::Constant(_) => ForceKind::Constant,
            Self::Accumulate(_) => ForceKind::Accumulator,
            Self::Override(_) => ForceKind::StateOverride,
        }
    }

    /// Applies this force to a thing.
    ///
    /// A constant is summed into the acceleration accumulator without any mass
    /// scaling. Functions are called with the thing.
    pub fn apply_to(&self, thing: Thing) -> Result<Thing> {
        match self {
            Self::Constant(vector) => {
                let acceleration = thing.get_acceleration().unwrap_or_default() + *vector;
                Ok(thing.with_acceleration(acceleration))
            }
            Self::Accumulate(f) | Self::Override(f) => f(thing),
        }
    }
}

impl fmt::Debug for Force {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Accumulate(_) => f.write_str("Accumulate(..)"),
            Self::Override(_) => f.write_str("Override(..)"),
        }
    }
}

impl From<Vector2> for Force {
    fn from(vector: Vector2) -> Self {
        Self::Constant(vector)
    }
}

impl From<&Force> for Option<Force> {
    fn from(force: &Force) -> Self {
        Some(force.clone())
    }
}

/// A force that returns the thing unchanged
pub fn null_force() -> Force {
    Force::accumulate(Ok)
}

/// Folds several forces, in order, into a single force.
///
/// The result is an [`Force::Override`] if any member overrides state,
/// otherwise an [`Force::Accumulate`].
pub fn compose<I>(forces: I) -> Force
where
    I: IntoIterator<Item = Force>,
{
    let forces: Vec<Force> = forces.into_iter().collect();
    let overrides = forces.iter().any(|f| f.kind() == ForceKind::StateOverride);

    let fold = move |thing: Thing| -> Result<Thing> {
        forces.iter().try_fold(thing, |t, force| force.apply_to(t))
    };

    if overrides {
        Force::state_override(fold)
    } else {
        Force::accumulate(fold)
    }
}
