//! Yaw angle helpers. All angles are in degrees, measured clockwise from
//! world forward (+Z) when seen from above.

use glam::Vec3;

/// One full turn.
pub const FULL_TURN: f32 = 360.0;

/// Wrap any finite angle into [0, 360).
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Heading of a ground-plane direction, in [0, 360).
///
/// ```rust
/// use glam::Vec3;
/// use stride::motion::direction_angle;
///
/// assert_eq!(direction_angle(Vec3::Z), 0.0);
/// assert_eq!(direction_angle(Vec3::X), 90.0);
/// assert_eq!(direction_angle(-Vec3::X), 270.0);
/// ```
pub fn direction_angle(direction: Vec3) -> f32 {
    normalize_degrees(direction.x.atan2(direction.z).to_degrees())
}

/// Reinterpret a heading relative to the camera's yaw.
///
/// Inside the camera contract (`camera_yaw` in [0, 360)) this is the same
/// as subtracting one full turn when the sum reaches 360. Out-of-contract
/// yaw values are wrapped as well.
pub fn add_camera_yaw(angle: f32, camera_yaw: f32) -> f32 {
    normalize_degrees(angle + camera_yaw)
}

/// Shortest signed difference from `current` to `target`, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(FULL_TURN);
    if delta > 180.0 {
        delta - FULL_TURN
    } else {
        delta
    }
}
