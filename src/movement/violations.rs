//! Violations reported when validating locomotion configuration.

use thiserror::Error;

/// A single problem found in a movement config or locomotion profile.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("State name must not be empty")]
    EmptyName,

    #[error("State '{state}': base speed must be finite and non-negative (got {value})")]
    InvalidBaseSpeed { state: String, value: f32 },

    #[error("State '{state}': speed modifier must be finite and non-negative (got {value})")]
    InvalidSpeedModifier { state: String, value: f32 },

    #[error("State '{state}': time to reach target rotation must be finite and positive (got {value})")]
    InvalidRotationTime { state: String, value: f32 },

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    #[error("Initial state '{0}' is not declared")]
    UnknownInitialState(String),

    #[error("Transition '{from}' -> '{to}' names an undeclared state")]
    UnknownTransitionState { from: String, to: String },
}
