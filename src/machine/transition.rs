//! Transition rules and the errors a transition request can fail with.

use crate::core::{Guard, State};
use thiserror::Error;

/// Errors that can occur when requesting a transition
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("Unknown state '{name}'")]
    UnknownState { name: String },

    #[error("No transition available from '{from}' to '{to}'")]
    NoTransition { from: String, to: String },

    #[error("Guard blocked transition from '{from}' to '{to}'")]
    GuardBlocked { from: String, to: String },
}

/// An allowed move between two named states, optionally guarded.
pub struct TransitionRule<S: State> {
    pub from: String,
    pub to: String,
    pub guard: Option<Guard<S>>,
}

impl<S: State> TransitionRule<S> {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            guard: None,
        }
    }

    pub fn guarded<F>(from: impl Into<String>, to: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            from: from.into(),
            to: to.into(),
            guard: Some(Guard::new(predicate)),
        }
    }

    /// Whether this rule connects `from` and `to`, ignoring the guard.
    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }

    /// Check if this rule can execute from the current state (pure)
    pub fn can_execute(&self, current: &S) -> bool {
        if current.name() != self.from {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }
}

impl<S: State> std::fmt::Debug for TransitionRule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionRule")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
