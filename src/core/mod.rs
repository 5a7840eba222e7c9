//! Core state machine types.
//!
//! - The `State` lifecycle trait every locomotion state implements
//! - Guard predicates for transition eligibility
//! - Bounded history of performed transitions

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_CAPACITY};
pub use state::{log_entered, State};
