//! Pure motion math used by the movement states.
//!
//! Nothing in here touches a collaborator; every function is a plain
//! transformation of its arguments so it can be tested in isolation.

mod angle;
mod damping;
mod force;

pub use angle::{add_camera_yaw, delta_angle, direction_angle, normalize_degrees, FULL_TURN};
pub use damping::{smooth_damp, smooth_damp_angle, RotationDamping, MIN_SMOOTH_TIME};
pub use force::{
    horizontal, movement_input_direction, target_rotation_direction, velocity_change,
    VELOCITY_MATCH_GAIN,
};
