use crate::bodies::{guard, Thing};
use crate::forces::Force;
use crate::integration::{compute_position_from_velocity, compute_velocity, IntegratorConfig};
use crate::math::Vector2;
use crate::Result;
use tracing::trace;

/// Advances `thing` by one tick under `forces`.
///
/// Forces are applied in order. `None` entries are skipped, constant vectors
/// are added straight to the acceleration accumulator, and force functions
/// replace the thing with their result. The accumulated acceleration is then
/// added to the velocity, the velocity to the position, and the accumulator is
/// reset to zero.
///
/// # Errors
///
/// Returns [`ForceError::MissingThing`](crate::error::ForceError::MissingThing)
/// if `thing` is `None`, or the first error raised by a force.
pub fn apply<T, I>(thing: T, forces: I) -> Result<Thing>
where
    T: Into<Option<Thing>>,
    I: IntoIterator,
    I::Item: Into<Option<Force>>,
{
    apply_with(&IntegratorConfig::default(), thing, forces)
}

/// Like [`apply`], but honours the given integrator configuration
///
/// # Errors
///
/// Also returns [`ForceError::InvalidParameter`](crate::error::ForceError::InvalidParameter)
/// if `config` fails [`IntegratorConfig::validate`].
pub fn apply_with<T, I>(config: &IntegratorConfig, thing: T, forces: I) -> Result<Thing>
where
    T: Into<Option<Thing>>,
    I: IntoIterator,
    I::Item: Into<Option<Force>>,
{
    config.validate()?;

    let thing: Option<Thing> = thing.into();
    let mut thing = *guard(thing.as_ref(), None)?;

    let mut applied = 0usize;
    for force in forces {
        let force: Option<Force> = force.into();
        let Some(force) = force else {
            continue;
        };
        thing = force.apply_to(thing)?;
        applied += 1;
    }

    let velocity = compute_velocity(
        thing.get_acceleration().unwrap_or_default(),
        thing.get_velocity().unwrap_or_default(),
        config.velocity_max,
    );
    let position = compute_position_from_velocity(thing.get_position().unwrap_or_default(), velocity);

    trace!(applied, %position, %velocity, "integrated tick");

    Ok(thing
        .with_position(position)
        .with_velocity(velocity)
        .with_acceleration(Vector2::zero()))
}
