//! The locomotion state machine.
//!
//! The machine owns every state up front and keeps them cached for its
//! whole lifetime. It forwards the input, frame and physics ticks to the
//! current state and is the only place transitions are decided.

mod machine;
mod transition;

pub use machine::StateMachine;
pub use transition::{TransitionError, TransitionRule};
