//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateHistory, DEFAULT_HISTORY_CAPACITY};
use crate::machine::{StateMachine, TransitionRule};
use std::collections::HashSet;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use stride::builder::MachineBuilder;
/// use stride::movement::{MovementConfig, MovementState};
///
/// let machine = MachineBuilder::new()
///     .state(MovementState::new(MovementConfig::walking()))
///     .state(MovementState::new(MovementConfig::sprinting()))
///     .initial("Walking")
///     .guarded_transition("Walking", "Sprinting", |s: &MovementState| s.has_movement_input())
///     .transition("Sprinting", "Walking")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_name(), "Walking");
/// ```
pub struct MachineBuilder<S: State> {
    states: Vec<S>,
    initial: Option<String>,
    rules: Vec<TransitionRule<S>>,
    history_capacity: usize,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            rules: Vec::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Add a state. Its name must be unique within the machine.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the initial state by name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Allow an unconditional transition.
    pub fn transition(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.add_rule(TransitionRule::new(from, to))
    }

    /// Allow a transition only while `predicate` holds for the state being left.
    pub fn guarded_transition<F>(
        self,
        from: impl Into<String>,
        to: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.add_rule(TransitionRule::guarded(from, to, predicate))
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: TransitionRule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of transitions the machine's history retains.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Build the state machine and enter its initial state.
    /// Returns an error if required fields are missing or names don't line up.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut names = HashSet::new();
        for state in &self.states {
            if !names.insert(state.name()) {
                return Err(BuildError::DuplicateState(state.name().to_string()));
            }
        }

        for rule in &self.rules {
            if !names.contains(rule.from.as_str()) || !names.contains(rule.to.as_str()) {
                return Err(BuildError::UnknownTransitionState {
                    from: rule.from.clone(),
                    to: rule.to.clone(),
                });
            }
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let index = self
            .states
            .iter()
            .position(|s| s.name() == initial)
            .ok_or(BuildError::UnknownInitialState(initial))?;

        Ok(StateMachine::from_parts(
            self.states,
            index,
            self.rules,
            StateHistory::with_capacity(self.history_capacity),
        ))
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
