//! The owner of the locomotion states: dispatches ticks to the current
//! state and performs transitions.

use crate::core::{State, StateHistory, StateTransition};
use crate::host::TickContext;
use crate::machine::transition::{TransitionError, TransitionRule};
use chrono::Utc;

/// Tick-driven state machine over pre-constructed, cached states.
///
/// Build one with [`crate::builder::MachineBuilder`].
#[derive(Debug)]
pub struct StateMachine<S: State> {
    states: Vec<S>,
    current: usize,
    rules: Vec<TransitionRule<S>>,
    history: StateHistory,
    ticks: u64,
}

impl<S: State> StateMachine<S> {
    /// Assemble a machine and enter its initial state. Callers guarantee
    /// that `initial` indexes into `states`.
    pub(crate) fn from_parts(
        states: Vec<S>,
        initial: usize,
        rules: Vec<TransitionRule<S>>,
        history: StateHistory,
    ) -> Self {
        let mut machine = Self {
            states,
            current: initial,
            rules,
            history,
            ticks: 0,
        };
        machine.states[machine.current].enter();
        machine
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.states[self.current]
    }

    pub fn current_state_mut(&mut self) -> &mut S {
        &mut self.states[self.current]
    }

    pub fn current_name(&self) -> &str {
        self.current_state().name()
    }

    /// Look up a cached state by name.
    pub fn state(&self, name: &str) -> Option<&S> {
        self.states.iter().find(|s| s.name() == name)
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn rules(&self) -> &[TransitionRule<S>] {
        &self.rules
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Number of fixed physics ticks dispatched so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Check whether `transition_to(name)` would succeed right now (pure)
    pub fn can_transition_to(&self, name: &str) -> bool {
        self.check_transition(name).is_ok()
    }

    fn check_transition(&self, name: &str) -> Result<usize, TransitionError> {
        let target = self
            .states
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| TransitionError::UnknownState {
                name: name.to_string(),
            })?;

        let current = self.current_state();
        let mut candidates = self
            .rules
            .iter()
            .filter(|rule| rule.connects(current.name(), name))
            .peekable();

        if candidates.peek().is_none() {
            return Err(TransitionError::NoTransition {
                from: current.name().to_string(),
                to: name.to_string(),
            });
        }

        if !candidates.any(|rule| rule.can_execute(current)) {
            return Err(TransitionError::GuardBlocked {
                from: current.name().to_string(),
                to: name.to_string(),
            });
        }

        Ok(target)
    }

    /// Leave the current state and enter `name`.
    ///
    /// The old state's `exit` runs before the new state's `enter`, and the
    /// transition is appended to the history.
    pub fn transition_to(&mut self, name: &str) -> Result<(), TransitionError> {
        let target = match self.check_transition(name) {
            Ok(target) => target,
            Err(error) => {
                log::warn!("{error}");
                return Err(error);
            }
        };

        let from = self.current_name().to_string();
        self.states[self.current].exit();

        log::debug!("transition {} -> {} at tick {}", from, name, self.ticks);
        self.history.record(StateTransition {
            from,
            to: name.to_string(),
            timestamp: Utc::now(),
            tick: self.ticks,
        });

        self.current = target;
        self.states[self.current].enter();
        Ok(())
    }

    /// Input-poll tick: forward to the current state.
    pub fn handle_input(&mut self, ctx: &TickContext<'_>) {
        self.states[self.current].handle_input(ctx);
    }

    /// Per-frame tick: forward to the current state.
    pub fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.states[self.current].update(ctx);
    }

    /// Fixed simulation tick: forward to the current state.
    pub fn physics_update(&mut self, ctx: &mut TickContext<'_>) {
        self.states[self.current].physics_update(ctx);
        self.ticks += 1;
    }
}
