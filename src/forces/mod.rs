mod force;
mod mass;
mod acceleration;
mod drag;
mod attraction;
mod target;
mod spring;
mod pendulum;
mod orientation;
mod bounce;

pub use self::force::{compose, null_force, Force, ForceFn, ForceKind};
pub use self::mass::{mass_apply_accel, MassMode};
pub use self::acceleration::acceleration_force;
pub use self::drag::{magnitude_force, velocity_force};
pub use self::attraction::{
    attraction_force, compute_attraction_force, Attractor, DistanceRange, DEFAULT_MAX_DISTANCE,
    DEFAULT_MIN_DISTANCE,
};
pub use self::target::{compute_acceleration_to_target, target_force, TargetOptions};
pub use self::spring::{spring_force, SpringOptions};
pub use self::pendulum::{pendulum_force, PendulumOptions, DEFAULT_PENDULUM_PIN};
pub use self::orientation::{
    angle_from_acceleration_force, angle_from_velocity_force, angular_force, orientation_force,
};
pub use self::bounce::{constrain_bounce, Bounds};
