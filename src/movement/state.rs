//! The movement state: camera-relative heading, smoothed yaw and a
//! velocity-matching force, recomputed every fixed tick.

use crate::core::{log_entered, State};
use crate::host::{RigidBody, TickContext};
use crate::motion::{
    add_camera_yaw, direction_angle, horizontal, movement_input_direction,
    target_rotation_direction, velocity_change, RotationDamping,
};
use crate::movement::config::MovementConfig;
use glam::{Vec2, Vec3};

/// A locomotion state driven by a [`MovementConfig`].
///
/// Each instance exclusively owns its cached input, its target yaw and the
/// buffers of its yaw filter. Entering or leaving the state clears the
/// filter buffers, so no damping momentum leaks between states.
///
/// # Example
///
/// ```rust
/// use glam::{Vec2, Vec3};
/// use stride::core::State;
/// use stride::movement::{MovementConfig, MovementState};
/// use stride::sim::HeadlessRig;
///
/// let mut rig = HeadlessRig::default();
/// let mut state = MovementState::new(MovementConfig::default());
/// state.enter();
///
/// rig.input.set(Vec2::new(0.0, 1.0));
/// state.handle_input(&rig.context());
/// state.physics_update(&mut rig.context());
///
/// assert_eq!(rig.body.velocity_changes(), &[Vec3::new(0.0, 0.0, 6.25)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MovementState {
    config: MovementConfig,
    movement_input: Vec2,
    target_yaw: f32,
    damping: RotationDamping,
}

impl MovementState {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            movement_input: Vec2::ZERO,
            target_yaw: 0.0,
            damping: RotationDamping::default(),
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Input cached by the last `handle_input`.
    pub fn movement_input(&self) -> Vec2 {
        self.movement_input
    }

    pub fn has_movement_input(&self) -> bool {
        self.movement_input != Vec2::ZERO
    }

    /// Desired yaw in degrees, in [0, 360).
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    pub fn damping(&self) -> RotationDamping {
        self.damping
    }

    pub fn movement_speed(&self) -> f32 {
        self.config.movement_speed()
    }

    fn is_idle(&self) -> bool {
        !self.has_movement_input() || self.config.speed_modifier == 0.0
    }

    fn move_body(&mut self, ctx: &mut TickContext<'_>) {
        if self.is_idle() {
            return;
        }

        let direction = movement_input_direction(self.movement_input);
        let camera_yaw = self
            .config
            .camera_relative
            .then(|| ctx.camera.yaw_degrees());

        let target_yaw = self.update_target_rotation(direction, camera_yaw);
        self.rotate_towards_target_rotation(ctx.body, ctx.clock.fixed_delta());

        let target_direction = target_rotation_direction(target_yaw);
        let current = horizontal(ctx.body.velocity());
        let change = velocity_change(target_direction, self.movement_speed(), current);

        log::trace!(
            "{}: target yaw {:.2}, velocity change {:?}",
            self.config.name,
            target_yaw,
            change
        );
        ctx.body.add_velocity_change(change);
    }

    /// Resolve the heading for `direction` and restart the yaw filter if
    /// it differs from the stored target.
    fn update_target_rotation(&mut self, direction: Vec3, camera_yaw: Option<f32>) -> f32 {
        let mut angle = direction_angle(direction);

        if let Some(camera_yaw) = camera_yaw {
            angle = add_camera_yaw(angle, camera_yaw);
        }

        if angle != self.target_yaw {
            log::debug!(
                "{}: target yaw {:.2} -> {:.2}",
                self.config.name,
                self.target_yaw,
                angle
            );
            self.target_yaw = angle;
            self.damping.passed_time = 0.0;
        }

        angle
    }

    fn rotate_towards_target_rotation(&mut self, body: &mut dyn RigidBody, dt: f32) {
        let current_yaw = body.yaw_degrees();
        if current_yaw == self.target_yaw {
            return;
        }

        let smoothed = self.damping.step(
            current_yaw,
            self.target_yaw,
            self.config.time_to_reach_target_rotation,
            dt,
        );

        body.set_yaw_degrees(smoothed);
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl State for MovementState {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn enter(&mut self) {
        self.damping.reset();
        log_entered(self.name());
    }

    fn exit(&mut self) {
        self.damping.reset();
        self.movement_input = Vec2::ZERO;
    }

    fn handle_input(&mut self, ctx: &TickContext<'_>) {
        self.movement_input = ctx.input.movement();
    }

    fn physics_update(&mut self, ctx: &mut TickContext<'_>) {
        self.move_body(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::HeadlessRig;

    fn moving(config: MovementConfig, rig: &mut HeadlessRig, input: Vec2) -> MovementState {
        let mut state = MovementState::new(config);
        state.enter();
        rig.input.set(input);
        state.handle_input(&rig.context());
        state
    }

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-4),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn handle_input_only_caches_input() {
        let mut rig = HeadlessRig::default();
        let state = moving(MovementConfig::default(), &mut rig, Vec2::new(0.5, -0.5));

        assert_eq!(state.movement_input(), Vec2::new(0.5, -0.5));
        assert!(rig.body.velocity_changes().is_empty());
        assert_eq!(rig.body.rotation_writes(), 0);
    }

    #[test]
    fn zero_input_skips_everything() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::ZERO);
        rig.body.set_yaw_degrees(45.0);
        let writes = rig.body.rotation_writes();

        state.physics_update(&mut rig.context());

        assert!(rig.body.velocity_changes().is_empty());
        assert_eq!(rig.body.rotation_writes(), writes);
        assert_eq!(state.target_yaw(), 0.0);
        assert_eq!(state.damping(), RotationDamping::default());
    }

    #[test]
    fn zero_modifier_skips_everything() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::idle(), &mut rig, Vec2::new(1.0, 0.0));

        state.physics_update(&mut rig.context());

        assert!(rig.body.velocity_changes().is_empty());
        assert_eq!(rig.body.rotation_writes(), 0);
        assert_eq!(state.target_yaw(), 0.0);
    }

    #[test]
    fn forward_input_pushes_forward() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(0.0, 1.0));

        state.physics_update(&mut rig.context());

        assert_eq!(state.target_yaw(), 0.0);
        assert_eq!(rig.body.velocity_changes().len(), 1);
        assert_close(rig.body.velocity_changes()[0], Vec3::new(0.0, 0.0, 6.25));
        // already facing the target: no rotation write
        assert_eq!(rig.body.rotation_writes(), 0);
    }

    #[test]
    fn force_subtracts_horizontal_velocity_only() {
        let mut rig = HeadlessRig::default();
        rig.body.velocity = Vec3::new(1.0, -3.0, 2.0);
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(0.0, 1.0));

        state.physics_update(&mut rig.context());

        assert_close(rig.body.velocity_changes()[0], Vec3::new(-1.0, 0.0, 4.25));
        assert_close(rig.body.velocity, Vec3::new(0.0, -3.0, 6.25));
    }

    #[test]
    fn camera_yaw_rotates_heading() {
        let mut rig = HeadlessRig::default();
        rig.camera.yaw = 90.0;
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(1.0, 0.0));

        state.physics_update(&mut rig.context());

        assert_eq!(state.target_yaw(), 180.0);
        assert_close(rig.body.velocity_changes()[0], Vec3::new(0.0, 0.0, -6.25));
    }

    #[test]
    fn camera_can_be_ignored() {
        let mut rig = HeadlessRig::default();
        rig.camera.yaw = 90.0;
        let config = MovementConfig::default().with_camera_relative(false);
        let mut state = moving(config, &mut rig, Vec2::new(1.0, 0.0));

        state.physics_update(&mut rig.context());

        assert_eq!(state.target_yaw(), 90.0);
        assert_close(rig.body.velocity_changes()[0], Vec3::new(6.25, 0.0, 0.0));
    }

    #[test]
    fn new_target_restarts_filter() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(1.0, 0.0));

        state.physics_update(&mut rig.context());
        state.physics_update(&mut rig.context());
        assert_eq!(state.target_yaw(), 90.0);
        assert!(state.damping().passed_time > 0.0);

        rig.input.set(Vec2::new(-1.0, 0.0));
        state.handle_input(&rig.context());
        state.physics_update(&mut rig.context());

        assert_eq!(state.target_yaw(), 270.0);
        // reset to zero, then advanced by exactly one tick
        assert_eq!(state.damping().passed_time, rig.clock.fixed_delta);
    }

    #[test]
    fn yaw_converges_on_target() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(1.0, 0.0));

        let mut previous = rig.body.yaw_degrees();
        for _ in 0..50 {
            state.physics_update(&mut rig.context());
            let yaw = rig.body.yaw_degrees();
            assert!(yaw >= previous);
            previous = yaw;
        }

        assert!((rig.body.yaw_degrees() - 90.0).abs() < 1e-2);
    }

    #[test]
    fn settled_yaw_leaves_filter_untouched() {
        let mut rig = HeadlessRig::default();
        rig.body.set_yaw_degrees(90.0);
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(1.0, 0.0));
        let writes = rig.body.rotation_writes();

        for _ in 0..5 {
            state.physics_update(&mut rig.context());
        }

        assert_eq!(state.damping(), RotationDamping::default());
        assert_eq!(rig.body.rotation_writes(), writes);
        assert_eq!(rig.body.velocity_changes().len(), 5);
    }

    #[test]
    fn enter_and_exit_clear_damping() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::default(), &mut rig, Vec2::new(1.0, 0.0));
        state.physics_update(&mut rig.context());
        assert_ne!(state.damping(), RotationDamping::default());

        state.exit();
        assert_eq!(state.damping(), RotationDamping::default());

        state.physics_update(&mut rig.context());
        state.enter();
        assert_eq!(state.damping(), RotationDamping::default());
    }

    #[test]
    fn exit_drops_cached_input() {
        let mut rig = HeadlessRig::default();
        let mut state = moving(MovementConfig::running(), &mut rig, Vec2::new(-1.0, 0.0));
        assert!(state.has_movement_input());

        state.exit();
        state.enter();
        state.physics_update(&mut rig.context());

        assert_eq!(state.movement_input(), Vec2::ZERO);
        assert!(rig.body.velocity_changes().is_empty());
        assert_eq!(rig.body.rotation_writes(), 0);
    }

    #[test]
    fn name_comes_from_config() {
        assert_eq!(MovementState::new(MovementConfig::sprinting()).name(), "Sprinting");
        assert_eq!(MovementState::default().name(), "Movement");
    }
}
