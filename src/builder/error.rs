//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No states added. Call .state(state) before .build()")]
    NoStates,

    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' was never added")]
    UnknownInitialState(String),

    #[error("State '{0}' was added more than once")]
    DuplicateState(String),

    #[error("Transition '{from}' -> '{to}' names a state that was never added")]
    UnknownTransitionState { from: String, to: String },
}
