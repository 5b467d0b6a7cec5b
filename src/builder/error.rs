//! Build errors for the container builder.

use crate::config::ConfigViolation;
use crate::core::SlotKind;
use crate::host::ResourceId;
use thiserror::Error;

/// Errors that can occur when building a container.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid container configuration ({} violation(s))", violations.len())]
    InvalidConfig { violations: Vec<ConfigViolation> },

    #[error("Host could not inflate {resource:?} for the {slot} slot")]
    InflationFailed { slot: SlotKind, resource: ResourceId },
}
