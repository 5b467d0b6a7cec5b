//! Configuration errors and violations.

use crate::core::SlotKind;
use thiserror::Error;

/// Errors loading or saving a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid container config JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize container config: {0}")]
    Serialize(String),
}

/// A single problem found by [`super::ContainerConfig::validate`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("No slot has a layout resource")]
    NoSlots,

    #[error("Initial slot {slot} has no layout resource")]
    InitialSlotMissing { slot: SlotKind },

    #[error("Action element id for the {slot} slot is 0")]
    ZeroActionElement { slot: SlotKind },
}
