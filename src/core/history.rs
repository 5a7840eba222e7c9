//! State transition history tracking.
//!
//! Bounded log of the transitions a machine performed, keyed by state
//! name so that heterogeneous state sets can share one history type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use stride::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Walking".to_string(),
///     to: "Sprinting".to_string(),
///     timestamp: Utc::now(),
///     tick: 120,
/// };
/// assert_eq!(transition.tick, 120);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
    /// Number of fixed physics ticks the machine had run at that point
    pub tick: u64,
}

/// Default number of transitions a history keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Ordered history of the most recent state transitions.
///
/// The history keeps at most `capacity` transitions; recording past the
/// capacity drops the oldest one. A capacity of zero records nothing.
///
/// # Example
///
/// ```rust
/// use stride::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(2);
/// for (from, to) in [("Idle", "Walking"), ("Walking", "Running"), ("Running", "Idle")] {
///     history.record(StateTransition {
///         from: from.to_string(),
///         to: to.to_string(),
///         timestamp: Utc::now(),
///         tick: 0,
///     });
/// }
///
/// assert_eq!(history.get_path(), vec!["Walking", "Running", "Idle"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    /// Create a new empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a transition, dropping the oldest one when full.
    pub fn record(&mut self, transition: StateTransition) {
        if self.capacity == 0 {
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of state names traversed.
    ///
    /// Returns the first `from` state, then the `to` state of each
    /// transition in order.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Calculate wall-clock duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of fixed ticks between the first and last transition.
    pub fn tick_span(&self) -> Option<u64> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => Some(last.tick.saturating_sub(first.tick)),
            _ => None,
        }
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition> {
        &self.transitions
    }
}
