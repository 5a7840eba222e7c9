//! Critically damped smoothing of scalar values and yaw angles.
//!
//! The filter is the usual game-engine approximation of a critically damped
//! spring: it reaches the target in roughly `smooth_time` seconds without
//! overshooting and carries a velocity accumulator between calls.

use super::angle::delta_angle;
use serde::{Deserialize, Serialize};

/// Smallest smoothing window accepted by [`smooth_damp`]. Shorter or
/// negative windows are clamped up to this value.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Move `current` towards `target`, updating `velocity` in place.
///
/// `max_speed` caps the rate of change (pass `f32::INFINITY` for no cap),
/// `dt` is the time step since the previous call.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let original_target = target;
    let max_change = max_speed * smooth_time;
    let change = (current - target).max(-max_change).min(max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // no overshoot
    if (original_target - current > 0.0) == (output > original_target) {
        output = original_target;
        *velocity = 0.0;
    }

    output
}

/// [`smooth_damp`] for angles in degrees, always taking the shortest arc.
///
/// The result is not wrapped; it may leave [0, 360) by up to half a turn.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, max_speed, dt)
}

/// Per-state buffers of the yaw smoothing filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationDamping {
    /// Velocity accumulator of the filter, degrees per second
    pub current_velocity: f32,
    /// Time spent approaching the current target, seconds
    pub passed_time: f32,
}

impl RotationDamping {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Smoothing window left for the current target.
    pub fn remaining_time(&self, time_to_reach: f32) -> f32 {
        (time_to_reach - self.passed_time).max(MIN_SMOOTH_TIME)
    }

    /// Run one filter step from `current` towards `target` and advance the
    /// elapsed time by `dt`.
    pub fn step(&mut self, current: f32, target: f32, time_to_reach: f32, dt: f32) -> f32 {
        let remaining = self.remaining_time(time_to_reach);
        let smoothed = smooth_damp_angle(
            current,
            target,
            &mut self.current_velocity,
            remaining,
            f32::INFINITY,
            dt,
        );
        self.passed_time += dt;
        smoothed
    }
}
