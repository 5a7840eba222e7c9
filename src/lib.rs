//! Stride: a tick-driven locomotion state machine
//!
//! Stride drives a playable character's ground movement from inside a
//! real-time simulation loop. Each locomotion mode (idle, walking, running,
//! sprinting, ...) is a state; the current state samples input on the
//! input tick and, on every fixed physics tick, turns it into a
//! camera-relative heading, smooths the body's yaw towards it and applies a
//! velocity-matching force.
//!
//! The host engine stays outside: input, camera, rigid body and clock are
//! reached only through the capability traits in [`host`], handed to every
//! tick as a [`host::TickContext`].
//!
//! # Core Concepts
//!
//! - **State**: lifecycle hooks via the [`core::State`] trait
//! - **MovementState**: the concrete, config-driven locomotion state
//! - **StateMachine**: owns the cached states and decides transitions
//! - **Profile**: JSON description of states and allowed transitions
//!
//! # Example
//!
//! ```rust
//! use glam::Vec2;
//! use stride::profile::LocomotionProfile;
//! use stride::sim::HeadlessRig;
//!
//! let mut machine = LocomotionProfile::default().build_machine().unwrap();
//! let mut rig = HeadlessRig::default();
//!
//! rig.input.set(Vec2::new(0.0, 1.0));
//! rig.run_frame(&mut machine, 1.0 / 60.0);
//! machine.transition_to("Running").unwrap();
//!
//! for _ in 0..30 {
//!     rig.run_frame(&mut machine, 1.0 / 60.0);
//! }
//! assert!(rig.body.position.z > 0.0);
//! ```

pub mod builder;
pub mod core;
pub mod host;
pub mod machine;
pub mod motion;
pub mod movement;
pub mod profile;
pub mod sim;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use host::TickContext;
pub use machine::{StateMachine, TransitionError};
pub use movement::{MovementConfig, MovementState};
pub use profile::LocomotionProfile;
