//! Headless collaborators for running the locomotion core without an
//! engine.
//!
//! Used by the crate's own tests, and handy for deterministic replays and
//! tuning tools. `SimBody` is not a physics engine: it only integrates
//! position from velocity and records what the states asked of it.

use crate::core::State;
use crate::host::{CameraRig, Clock, InputSource, RigidBody, TickContext};
use crate::machine::StateMachine;
use crate::motion::normalize_degrees;
use glam::{EulerRot, Quat, Vec2, Vec3};

/// Default fixed simulation step, 50 Hz.
pub const DEFAULT_FIXED_DELTA: f32 = 0.02;

/// Input source returning whatever was last set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScriptedInput {
    pub value: Vec2,
}

impl ScriptedInput {
    pub fn new(value: Vec2) -> Self {
        Self { value }
    }

    pub fn set(&mut self, value: Vec2) {
        self.value = value;
    }
}

impl InputSource for ScriptedInput {
    fn movement(&self) -> Vec2 {
        self.value
    }
}

/// Camera with a fixed yaw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedCamera {
    pub yaw: f32,
}

impl FixedCamera {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }
}

impl CameraRig for FixedCamera {
    fn yaw_degrees(&self) -> f32 {
        self.yaw
    }
}

/// Clock with a constant fixed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock {
    pub fixed_delta: f32,
}

impl FixedClock {
    pub fn new(fixed_delta: f32) -> Self {
        Self { fixed_delta }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DELTA)
    }
}

impl Clock for FixedClock {
    fn fixed_delta(&self) -> f32 {
        self.fixed_delta
    }
}

/// In-memory rigid body that records every request made of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimBody {
    pub position: Vec3,
    pub velocity: Vec3,
    yaw: f32,
    velocity_changes: Vec<Vec3>,
    rotation_writes: usize,
}

impl SimBody {
    /// Every velocity change applied so far, oldest first.
    pub fn velocity_changes(&self) -> &[Vec3] {
        &self.velocity_changes
    }

    /// Number of absolute rotation writes.
    pub fn rotation_writes(&self) -> usize {
        self.rotation_writes
    }

    /// Advance position by the current velocity.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

impl RigidBody for SimBody {
    fn yaw_degrees(&self) -> f32 {
        self.yaw
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn add_velocity_change(&mut self, delta: Vec3) {
        self.velocity += delta;
        self.velocity_changes.push(delta);
    }

    fn move_rotation(&mut self, rotation: Quat) {
        let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
        self.yaw = normalize_degrees(yaw.to_degrees());
        self.rotation_writes += 1;
    }

    // stored as given so that a settled yaw compares equal to its target
    fn set_yaw_degrees(&mut self, yaw: f32) {
        self.yaw = normalize_degrees(yaw);
        self.rotation_writes += 1;
    }
}

/// Turns variable frame times into a whole number of fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_steps_per_frame: u32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_steps_per_frame: 8,
        }
    }

    /// Cap on steps per frame; time beyond the cap is dropped so a long
    /// stall does not snowball.
    pub fn with_max_steps_per_frame(mut self, max_steps: u32) -> Self {
        self.max_steps_per_frame = max_steps;
        self
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's worth of time and return how many fixed steps to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if self.step <= 0.0 || !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }

        self.accumulator += frame_dt;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_frame {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_steps_per_frame && self.accumulator >= self.step {
            log::warn!(
                "dropping {:.3}s of simulation time after {} steps",
                self.accumulator,
                steps
            );
            self.accumulator = 0.0;
        }

        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        if self.step > 0.0 {
            self.accumulator / self.step
        } else {
            0.0
        }
    }
}

/// A complete headless set of collaborators plus a fixed-step scheduler.
#[derive(Clone, Debug)]
pub struct HeadlessRig {
    pub input: ScriptedInput,
    pub camera: FixedCamera,
    pub body: SimBody,
    pub clock: FixedClock,
    pub timestep: FixedTimestep,
}

impl Default for HeadlessRig {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DELTA)
    }
}

impl HeadlessRig {
    pub fn new(fixed_delta: f32) -> Self {
        Self {
            input: ScriptedInput::default(),
            camera: FixedCamera::default(),
            body: SimBody::default(),
            clock: FixedClock::new(fixed_delta),
            timestep: FixedTimestep::new(fixed_delta),
        }
    }

    /// Borrow the collaborators as a tick context.
    pub fn context(&mut self) -> TickContext<'_> {
        TickContext::new(&self.input, &self.camera, &mut self.body, &self.clock)
    }

    /// Run one frame: one input poll, one frame update, then as many fixed
    /// physics ticks as `frame_dt` pays for. Returns the number of physics
    /// ticks run.
    pub fn run_frame<S: State>(&mut self, machine: &mut StateMachine<S>, frame_dt: f32) -> u32 {
        machine.handle_input(&self.context());
        machine.update(&mut self.context());

        let steps = self.timestep.advance(frame_dt);
        for _ in 0..steps {
            machine.physics_update(&mut self.context());
            self.body.integrate(self.clock.fixed_delta);
        }

        log::trace!("frame of {:.4}s ran {} physics ticks", frame_dt, steps);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::movement::{MovementConfig, MovementState};

    #[test]
    fn sim_body_records_velocity_changes() {
        let mut body = SimBody::default();

        body.add_velocity_change(Vec3::X);
        body.add_velocity_change(Vec3::Z);

        assert_eq!(body.velocity, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(body.velocity_changes(), &[Vec3::X, Vec3::Z]);
    }

    #[test]
    fn sim_body_wraps_yaw() {
        let mut body = SimBody::default();

        body.set_yaw_degrees(370.0);
        assert_eq!(body.yaw_degrees(), 10.0);

        body.set_yaw_degrees(-10.0);
        assert_eq!(body.yaw_degrees(), 350.0);
    }

    #[test]
    fn integrate_moves_by_velocity() {
        let mut body = SimBody {
            velocity: Vec3::new(0.0, 0.0, 5.0),
            ..SimBody::default()
        };

        body.integrate(0.5);

        assert_eq!(body.position, Vec3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn timestep_accumulates_partial_frames() {
        let mut timestep = FixedTimestep::new(0.25);

        assert_eq!(timestep.advance(0.125), 0);
        assert_eq!(timestep.advance(0.125), 1);
        assert_eq!(timestep.advance(0.5), 2);
        assert_eq!(timestep.alpha(), 0.0);
    }

    #[test]
    fn timestep_runs_zero_or_many_steps() {
        let mut timestep = FixedTimestep::new(0.25);

        assert_eq!(timestep.advance(0.0), 0);
        assert_eq!(timestep.advance(0.75), 3);
        assert_eq!(timestep.advance(f32::NAN), 0);
    }

    #[test]
    fn timestep_drops_time_beyond_cap() {
        let mut timestep = FixedTimestep::new(0.25).with_max_steps_per_frame(2);

        assert_eq!(timestep.advance(2.0), 2);
        assert_eq!(timestep.alpha(), 0.0);
        assert_eq!(timestep.advance(0.25), 1);
    }

    #[test]
    fn run_frame_drives_every_channel() {
        let mut rig = HeadlessRig::new(0.25);
        let mut machine = MachineBuilder::new()
            .state(MovementState::new(MovementConfig::default()))
            .initial("Movement")
            .build()
            .unwrap();

        rig.input.set(Vec2::new(0.0, 1.0));
        let steps = rig.run_frame(&mut machine, 0.5);

        assert_eq!(steps, 2);
        assert_eq!(machine.ticks(), 2);
        assert_eq!(rig.body.velocity_changes().len(), 2);
        assert!((rig.body.velocity.z - 6.25).abs() < 1e-5);
        assert!((rig.body.position.z - 6.25 * 0.5).abs() < 1e-4);
    }
}
