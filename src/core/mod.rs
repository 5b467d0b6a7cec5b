//! Pure state types for the container.
//!
//! This module contains no host interaction:
//! - Slot kinds and the show state enum
//! - Bounded transition history
//!
//! The container in [`crate::container`] is the imperative shell around it.

mod history;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::{ShowState, SlotKind, UnknownStateCode, UNSET_CODE};
