//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the state being left. They let an
//! owner express transition eligibility ("only sprint while moving") without
//! putting transition logic inside the states themselves.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use stride::core::Guard;
/// use stride::movement::{MovementConfig, MovementState};
///
/// let only_while_moving = Guard::new(|s: &MovementState| s.has_movement_input());
///
/// let idle = MovementState::new(MovementConfig::idle());
/// assert!(!only_while_moving.check(&idle));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&S)>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows a transition out of this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::{MovementConfig, MovementState};
    use crate::sim::HeadlessRig;
    use glam::Vec2;

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &MovementState| s.name() == "Walking");

        assert!(guard.check(&MovementState::new(MovementConfig::walking())));
        assert!(!guard.check(&MovementState::new(MovementConfig::running())));
    }

    #[test]
    fn guard_follows_cached_input() {
        let guard = Guard::new(|s: &MovementState| s.has_movement_input());
        let mut rig = HeadlessRig::default();
        let mut state = MovementState::new(MovementConfig::running());

        assert!(!guard.check(&state));

        rig.input.set(Vec2::new(0.0, 1.0));
        crate::core::State::handle_input(&mut state, &rig.context());
        assert!(guard.check(&state));

        rig.input.set(Vec2::ZERO);
        crate::core::State::handle_input(&mut state, &rig.context());
        assert!(!guard.check(&state));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = MovementState::new(MovementConfig::sprinting());
        let guard = Guard::new(|s: &MovementState| s.movement_speed() > 3.0);

        let result1 = guard.check(&state);
        let result2 = guard.check(&state);

        assert_eq!(result1, result2);
    }
}
