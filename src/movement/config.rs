//! Tunables of a movement state.
//!
//! Locomotion variants differ only in these numbers, so a new variant is a
//! new `MovementConfig` rather than a new type.

use crate::movement::violations::ConfigViolation;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

fn default_base_speed() -> f32 {
    2.5
}

fn default_speed_modifier() -> f32 {
    0.5
}

fn default_time_to_reach_target_rotation() -> f32 {
    0.14
}

fn default_camera_relative() -> bool {
    true
}

/// Per-state movement tunables.
///
/// Movement speed is `base_speed * speed_modifier`, in world units per
/// second. Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use stride::movement::MovementConfig;
///
/// let crouching = MovementConfig::named("Crouching")
///     .with_speed_modifier(0.3)
///     .with_time_to_reach_target_rotation(0.25);
///
/// assert!(crouching.validate().is_success());
/// assert!((crouching.movement_speed() - 0.75).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    pub name: String,

    #[serde(default = "default_base_speed")]
    pub base_speed: f32,

    #[serde(default = "default_speed_modifier")]
    pub speed_modifier: f32,

    /// Smoothing window of the yaw filter, in seconds
    #[serde(default = "default_time_to_reach_target_rotation")]
    pub time_to_reach_target_rotation: f32,

    /// Interpret input relative to the camera's yaw
    #[serde(default = "default_camera_relative")]
    pub camera_relative: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::named("Movement")
    }
}

impl MovementConfig {
    /// Default tunables under the given state name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_speed: default_base_speed(),
            speed_modifier: default_speed_modifier(),
            time_to_reach_target_rotation: default_time_to_reach_target_rotation(),
            camera_relative: default_camera_relative(),
        }
    }

    /// Standing still. A zero modifier short-circuits all motion.
    pub fn idle() -> Self {
        Self::named("Idle").with_speed_modifier(0.0)
    }

    pub fn walking() -> Self {
        Self::named("Walking").with_speed_modifier(0.225)
    }

    pub fn running() -> Self {
        Self::named("Running").with_speed_modifier(1.0)
    }

    pub fn sprinting() -> Self {
        Self::named("Sprinting").with_speed_modifier(1.7)
    }

    pub fn with_base_speed(mut self, base_speed: f32) -> Self {
        self.base_speed = base_speed;
        self
    }

    pub fn with_speed_modifier(mut self, speed_modifier: f32) -> Self {
        self.speed_modifier = speed_modifier;
        self
    }

    pub fn with_time_to_reach_target_rotation(mut self, seconds: f32) -> Self {
        self.time_to_reach_target_rotation = seconds;
        self
    }

    pub fn with_camera_relative(mut self, camera_relative: bool) -> Self {
        self.camera_relative = camera_relative;
        self
    }

    pub fn movement_speed(&self) -> f32 {
        self.base_speed * self.speed_modifier
    }

    /// Validate every field, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            check(!self.name.trim().is_empty(), || ConfigViolation::EmptyName),
            check(is_non_negative(self.base_speed), || {
                ConfigViolation::InvalidBaseSpeed {
                    state: self.name.clone(),
                    value: self.base_speed,
                }
            }),
            check(is_non_negative(self.speed_modifier), || {
                ConfigViolation::InvalidSpeedModifier {
                    state: self.name.clone(),
                    value: self.speed_modifier,
                }
            }),
            check(
                self.time_to_reach_target_rotation.is_finite()
                    && self.time_to_reach_target_rotation > 0.0,
                || ConfigViolation::InvalidRotationTime {
                    state: self.name.clone(),
                    value: self.time_to_reach_target_rotation,
                },
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

pub(crate) fn check(
    passed: bool,
    violation: impl FnOnce() -> ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
