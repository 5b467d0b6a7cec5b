//! Container error types.

use crate::core::SlotKind;
use crate::host::{ElementId, StringId};
use thiserror::Error;

/// Errors reported by explicit container operations.
///
/// The `show_*` family never surfaces the text-related variants: a failed
/// text update is logged and the transition still happens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContainerError {
    /// The slot's view was never registered
    #[error("{slot} slot is not registered")]
    SlotNotRegistered { slot: SlotKind },

    /// No descendant with this id inside the slot's view
    #[error("Element {element:?} not found in {slot} view")]
    ElementNotFound { slot: SlotKind, element: ElementId },

    /// The element exists but cannot display text
    #[error("Element {element:?} in {slot} view cannot display text")]
    NotTextCapable { slot: SlotKind, element: ElementId },

    /// The host has no string for this id
    #[error("String resource {0:?} not found")]
    StringNotFound(StringId),
}
