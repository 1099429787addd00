use crate::bodies::{Thing, ThingId};
use crate::error::ForceError;
use crate::forces::Force;
use crate::math::{clamp, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Default lower bound on the distance used in the attraction calculation
pub const DEFAULT_MIN_DISTANCE: f32 = 0.01;

/// Default upper bound on the distance used in the attraction calculation
pub const DEFAULT_MAX_DISTANCE: f32 = 0.7;

/// Bounds applied to the distance between two things before it is squared.
///
/// Clamping the distance keeps very close things from producing huge (or
/// infinite) forces and keeps distant things from becoming negligible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DistanceRange {
    /// Smallest distance used, defaults to [`DEFAULT_MIN_DISTANCE`]
    pub min: Option<f32>,

    /// Largest distance used, defaults to [`DEFAULT_MAX_DISTANCE`]
    pub max: Option<f32>,
}

impl DistanceRange {
    /// Creates a range with both bounds set
    pub fn new(min: f32, max: f32) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Clamps `distance` into the range, filling in defaults for unset bounds
    pub fn clamp(&self, distance: f32) -> f32 {
        clamp(
            distance,
            self.min.unwrap_or(DEFAULT_MIN_DISTANCE),
            self.max.unwrap_or(DEFAULT_MAX_DISTANCE),
        )
    }
}

/// A thing taking part in an attraction force, tagged with its id
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Attractor {
    pub id: ThingId,
    pub thing: Thing,
}

impl Attractor {
    pub fn new(id: impl Into<ThingId>, thing: Thing) -> Self {
        Self { id: id.into(), thing }
    }

    /// Tags each thing with its index as id
    pub fn enumerate(things: &[Thing]) -> Vec<Attractor> {
        things
            .iter()
            .zip(0u32..)
            .map(|(thing, i)| Attractor::new(ThingId(i), *thing))
            .collect()
    }
}

/// Computes the pull of `attractor` on `attractee`.
///
/// The magnitude is `gravity * m_attractor * m_attractee / d²`, where `d` is
/// the distance between the two clamped into `distance_range`. The result
/// points from the attractee towards the attractor.
///
/// # Errors
///
/// Returns [`ForceError::MissingField`] if either thing has no position.
pub fn compute_attraction_force(
    attractor: &Thing,
    attractee: &Thing,
    gravity: f32,
    distance_range: DistanceRange,
) -> Result<Vector2> {
    let attractor_pos = attractor.get_position().ok_or(ForceError::MissingField {
        name: "attractor",
        field: "position",
    })?;
    let attractee_pos = attractee.get_position().ok_or(ForceError::MissingField {
        name: "attractee",
        field: "position",
    })?;

    let offset = attractor_pos - attractee_pos;
    let direction = offset.normalize();
    let distance = distance_range.clamp(offset.length());

    let magnitude = gravity * attractor.get_mass() * attractee.get_mass() / (distance * distance);
    Ok(direction * magnitude)
}

/// A force pulling a thing towards every attractor in `attractors`.
///
/// Attractors whose id equals `attractee_id` are skipped, so the same list can
/// be shared by every body of an N-body system. Pass `None` when the thing
/// being affected is not itself in the list.
///
/// The summed pull is added to the thing's acceleration without mass scaling
/// (the masses already appear in the attraction formula).
pub fn attraction_force(
    attractors: Vec<Attractor>,
    attractee_id: Option<ThingId>,
    gravity: f32,
    distance_range: DistanceRange,
) -> Force {
    Force::accumulate(move |attractee| {
        let pull = attractors
            .iter()
            .filter(|a| Some(a.id) != attractee_id)
            .map(|a| compute_attraction_force(&a.thing, &attractee, gravity, distance_range))
            .sum::<Result<Vector2>>()?;

        let acceleration = attractee.get_acceleration().unwrap_or_default() + pull;
        Ok(attractee.with_acceleration(acceleration))
    })
}
