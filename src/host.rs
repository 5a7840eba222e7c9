//! Capabilities the locomotion core needs from its host engine.
//!
//! The core never reaches for a global player, camera or physics world.
//! Instead the owner hands a [`TickContext`] to every tick, bundling the
//! four collaborators below. Any engine (or the in-memory [`crate::sim`]
//! rig) can implement them.

use glam::{Quat, Vec2, Vec3};

/// Poll-based movement axis read.
pub trait InputSource {
    /// Last sampled movement vector, components conventionally in [-1, 1].
    fn movement(&self) -> Vec2;
}

/// The viewing camera.
pub trait CameraRig {
    /// Current camera yaw in degrees, expected in [0, 360).
    fn yaw_degrees(&self) -> f32;
}

/// The character's rigid body.
pub trait RigidBody {
    /// Current world yaw in degrees, in [0, 360).
    fn yaw_degrees(&self) -> f32;

    /// Current linear velocity.
    fn velocity(&self) -> Vec3;

    /// Add `delta` to the velocity directly, ignoring mass.
    fn add_velocity_change(&mut self, delta: Vec3);

    /// Set the absolute world rotation, bypassing torque integration.
    fn move_rotation(&mut self, rotation: Quat);

    /// Set the absolute world rotation from a yaw angle in degrees.
    fn set_yaw_degrees(&mut self, yaw: f32) {
        self.move_rotation(Quat::from_rotation_y(yaw.to_radians()));
    }
}

/// Frame-timing service.
pub trait Clock {
    /// Duration of one fixed simulation tick, in seconds.
    fn fixed_delta(&self) -> f32;
}

/// Everything a state may touch during one tick.
pub struct TickContext<'a> {
    pub input: &'a dyn InputSource,
    pub camera: &'a dyn CameraRig,
    pub body: &'a mut dyn RigidBody,
    pub clock: &'a dyn Clock,
}

impl<'a> TickContext<'a> {
    pub fn new(
        input: &'a dyn InputSource,
        camera: &'a dyn CameraRig,
        body: &'a mut dyn RigidBody,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            input,
            camera,
            body,
            clock,
        }
    }
}
