//! Ground-plane directions and the velocity-matching force law.

use glam::{Quat, Vec2, Vec3};

/// Gain between movement speed and the horizontal velocity the controller
/// drives the body towards.
pub const VELOCITY_MATCH_GAIN: f32 = 5.0;

/// Map a 2D input axis onto the ground plane: input y is world forward
/// (+Z), input x is world right (+X).
pub fn movement_input_direction(input: Vec2) -> Vec3 {
    Vec3::new(input.x, 0.0, input.y)
}

/// World forward rotated by `yaw` degrees around the vertical axis.
pub fn target_rotation_direction(yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw.to_radians()) * Vec3::Z
}

/// `velocity` with its vertical component removed.
pub fn horizontal(velocity: Vec3) -> Vec3 {
    Vec3::new(velocity.x, 0.0, velocity.z)
}

/// Velocity change that brings the horizontal velocity to
/// `direction * speed * VELOCITY_MATCH_GAIN` in a single tick.
pub fn velocity_change(direction: Vec3, speed: f32, horizontal_velocity: Vec3) -> Vec3 {
    direction * speed * VELOCITY_MATCH_GAIN - horizontal_velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn input_maps_onto_ground_plane() {
        assert_eq!(movement_input_direction(Vec2::new(0.0, 1.0)), Vec3::Z);
        assert_eq!(movement_input_direction(Vec2::new(1.0, 0.0)), Vec3::X);
        assert_eq!(
            movement_input_direction(Vec2::new(-0.5, 0.25)),
            Vec3::new(-0.5, 0.0, 0.25)
        );
    }

    #[test]
    fn rotation_direction_turns_clockwise() {
        assert_close(target_rotation_direction(0.0), Vec3::Z);
        assert_close(target_rotation_direction(90.0), Vec3::X);
        assert_close(target_rotation_direction(180.0), -Vec3::Z);
        assert_close(target_rotation_direction(270.0), -Vec3::X);
    }

    #[test]
    fn horizontal_drops_vertical_component() {
        assert_eq!(
            horizontal(Vec3::new(1.0, -9.8, 2.0)),
            Vec3::new(1.0, 0.0, 2.0)
        );
    }

    #[test]
    fn velocity_change_cancels_current_motion() {
        let change = velocity_change(Vec3::Z, 1.25, Vec3::new(1.0, 0.0, 2.0));
        assert_close(change, Vec3::new(-1.0, 0.0, 4.25));
    }

    #[test]
    fn zero_speed_brakes_to_a_stop() {
        let change = velocity_change(Vec3::X, 0.0, Vec3::new(3.0, 0.0, -1.0));
        assert_close(change, Vec3::new(-3.0, 0.0, 1.0));
    }
}
