//! Data-driven locomotion profiles.
//!
//! A profile lists the movement states of a character and the transitions
//! its owner may take between them. Adding a locomotion variant is a matter
//! of adding an entry to the profile; no new code is required.
//!
//! # Example
//!
//! ```rust
//! use stride::profile::LocomotionProfile;
//!
//! let profile = LocomotionProfile::from_json(r#"{
//!     "initial": "Idle",
//!     "states": [
//!         { "name": "Idle", "speed_modifier": 0.0 },
//!         { "name": "Jogging", "speed_modifier": 0.8 }
//!     ],
//!     "transitions": [
//!         { "from": "Idle", "to": "Jogging", "requires_movement_input": true },
//!         { "from": "Jogging", "to": "Idle" }
//!     ]
//! }"#).unwrap();
//!
//! let machine = profile.build_machine().unwrap();
//! assert_eq!(machine.current_name(), "Idle");
//! ```

mod error;

pub use error::ConfigError;

use crate::builder::MachineBuilder;
use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::machine::{StateMachine, TransitionRule};
use crate::movement::{check, ConfigViolation, MovementConfig, MovementState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An allowed transition between two named states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from: String,
    pub to: String,

    /// Only allow the transition while the state being left has non-zero
    /// cached movement input
    #[serde(default)]
    pub requires_movement_input: bool,
}

impl TransitionSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            requires_movement_input: false,
        }
    }

    pub fn while_moving(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            requires_movement_input: true,
            ..Self::new(from, to)
        }
    }

    fn to_rule(&self) -> TransitionRule<MovementState> {
        if self.requires_movement_input {
            TransitionRule::guarded(&self.from, &self.to, MovementState::has_movement_input)
        } else {
            TransitionRule::new(&self.from, &self.to)
        }
    }
}

/// Serializable description of a locomotion state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocomotionProfile {
    pub initial: String,
    pub states: Vec<MovementConfig>,
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,

    /// Number of transitions the built machine's history retains
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for LocomotionProfile {
    /// Idle, walking, running and sprinting with the usual grounded
    /// transitions. Speeding up requires movement input.
    fn default() -> Self {
        Self {
            initial: "Idle".to_string(),
            states: vec![
                MovementConfig::idle(),
                MovementConfig::walking(),
                MovementConfig::running(),
                MovementConfig::sprinting(),
            ],
            transitions: vec![
                TransitionSpec::while_moving("Idle", "Walking"),
                TransitionSpec::while_moving("Idle", "Running"),
                TransitionSpec::new("Walking", "Idle"),
                TransitionSpec::new("Walking", "Running"),
                TransitionSpec::new("Running", "Idle"),
                TransitionSpec::new("Running", "Walking"),
                TransitionSpec::while_moving("Running", "Sprinting"),
                TransitionSpec::new("Sprinting", "Running"),
                TransitionSpec::new("Sprinting", "Idle"),
            ],
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl LocomotionProfile {
    /// Parse and validate a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.ensure_valid()?;
        Ok(profile)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a state's config by name.
    pub fn state(&self, name: &str) -> Option<&MovementConfig> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Validate every state and every name reference, accumulating ALL
    /// violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> =
            self.states.iter().map(MovementConfig::validate).collect();

        let mut names = HashSet::new();
        for state in &self.states {
            checks.push(check(names.insert(state.name.as_str()), || {
                ConfigViolation::DuplicateState(state.name.clone())
            }));
        }

        checks.push(check(names.contains(self.initial.as_str()), || {
            ConfigViolation::UnknownInitialState(self.initial.clone())
        }));

        for transition in &self.transitions {
            let known =
                names.contains(transition.from.as_str()) && names.contains(transition.to.as_str());
            checks.push(check(known, || ConfigViolation::UnknownTransitionState {
                from: transition.from.clone(),
                to: transition.to.clone(),
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn ensure_valid(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }

    /// Validate the profile and build a machine sitting in its initial
    /// state.
    pub fn build_machine(&self) -> Result<StateMachine<MovementState>, ConfigError> {
        self.ensure_valid()?;

        let builder = self
            .transitions
            .iter()
            .fold(MachineBuilder::new(), |builder, t| builder.add_rule(t.to_rule()));

        let machine = builder
            .states(self.states.iter().cloned().map(MovementState::new))
            .initial(self.initial.clone())
            .history_capacity(self.history_capacity)
            .build()?;

        log::debug!(
            "built locomotion machine with {} states and {} transitions",
            self.states.len(),
            self.transitions.len()
        );
        Ok(machine)
    }
}
