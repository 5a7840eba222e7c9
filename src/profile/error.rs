//! Errors raised while loading a locomotion profile.

use crate::builder::BuildError;
use crate::movement::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when loading or building a profile
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid profile JSON
    #[error("Failed to parse locomotion profile: {0}")]
    Parse(#[from] serde_json::Error),

    /// The profile parsed but describes an invalid machine
    #[error("Invalid locomotion profile: {}", format_violations(.violations))]
    Invalid { violations: Vec<ConfigViolation> },

    #[error(transparent)]
    Build(#[from] BuildError),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
