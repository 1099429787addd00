mod thing;

pub use self::thing::Thing;

use crate::error::ForceError;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a thing, used where a force has to tell things apart
/// (for example to keep an attractor from pulling on itself)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ThingId(pub u32);

impl From<u32> for ThingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Checks that a thing is present, returning it.
///
/// `name` is used in the error message and defaults to `"thing"`.
///
/// # Errors
///
/// Returns [`ForceError::MissingThing`] if `thing` is `None`.
pub fn guard<'a>(thing: Option<&'a Thing>, name: Option<&'static str>) -> crate::Result<&'a Thing> {
    thing.ok_or(ForceError::MissingThing {
        name: name.unwrap_or("thing"),
    })
}
