mod euler;
mod config;
mod apply;
mod force_set;

pub use self::euler::{compute_position_from_angle, compute_position_from_velocity, compute_velocity};
pub use self::config::IntegratorConfig;
pub use self::apply::{apply, apply_with};
pub use self::force_set::ForceSet;
