//! Movement states and their tunables.
//!
//! Every grounded locomotion variant (idle, walking, running, sprinting)
//! runs the same per-tick pipeline:
//!
//! 1. map the cached input onto the ground plane,
//! 2. turn it into a heading and add the camera's yaw,
//! 3. restart the yaw filter when the heading changes,
//! 4. smooth the body's yaw towards the heading,
//! 5. push the horizontal velocity towards `heading * speed * 5`.
//!
//! Variants only differ in their [`MovementConfig`].

mod config;
mod state;
mod violations;

pub use config::MovementConfig;
pub(crate) use config::check;
pub use state::MovementState;
pub use violations::ConfigViolation;
