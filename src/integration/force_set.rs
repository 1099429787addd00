use crate::bodies::Thing;
use crate::forces::{Force, ForceKind};
use crate::integration::{apply_with, IntegratorConfig};
use crate::Result;

/// An ordered list of forces applied together every tick.
///
/// Build it once, then call [`ForceSet::apply`] with each thing on every tick.
#[derive(Debug, Clone, Default)]
pub struct ForceSet {
    /// The forces, in application order
    forces: Vec<Force>,

    /// Integrator settings used by [`ForceSet::apply`]
    config: IntegratorConfig,
}

impl ForceSet {
    /// Creates a new empty force set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a force, builder style
    pub fn with(mut self, force: impl Into<Force>) -> Self {
        self.forces.push(force.into());
        self
    }

    /// Sets the integrator configuration, builder style
    pub fn with_config(mut self, config: IntegratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a force to the end of the set
    pub fn push(&mut self, force: impl Into<Force>) {
        self.forces.push(force.into());
    }

    /// Removes a force by index
    pub fn remove(&mut self, index: usize) -> Option<Force> {
        if index < self.forces.len() {
            Some(self.forces.remove(index))
        } else {
            None
        }
    }

    /// Returns the number of forces in the set
    pub fn len(&self) -> usize {
        self.forces.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Returns a force by index
    pub fn get(&self, index: usize) -> Option<&Force> {
        self.forces.get(index)
    }

    /// Returns the integrator configuration
    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    /// Returns true if any force in the set overrides state directly
    pub fn has_state_overrides(&self) -> bool {
        self.forces.iter().any(|f| f.kind() == ForceKind::StateOverride)
    }

    /// Clears all forces
    pub fn clear(&mut self) {
        self.forces.clear();
    }

    /// Advances `thing` by one tick under every force in the set
    pub fn apply(&self, thing: Thing) -> Result<Thing> {
        apply_with(&self.config, thing, &self.forces)
    }
}

impl FromIterator<Force> for ForceSet {
    fn from_iter<I: IntoIterator<Item = Force>>(iter: I) -> Self {
        Self {
            forces: iter.into_iter().collect(),
            config: IntegratorConfig::default(),
        }
    }
}
