//! Builder API for ergonomic state machine construction.
//!
//! The builder collects states and rules, checks that every name lines up,
//! and hands back a machine already sitting in its initial state.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;
