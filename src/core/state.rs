//! Slot kinds and the container's show state.
//!
//! All methods are pure. `SlotKind` names one of the four views a container
//! can hold; `ShowState` is `SlotKind` plus the initial `Unset` state.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the four mutually exclusive views managed by a container.
///
/// # Example
///
/// ```rust
/// use statepane::core::{ShowState, SlotKind};
///
/// assert_eq!(SlotKind::Empty.name(), "Empty");
/// assert_eq!(ShowState::from(SlotKind::Empty).code(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Loading,
    Content,
    Empty,
    Error,
}

impl SlotKind {
    /// Every slot kind, in registration order.
    pub const ALL: [SlotKind; 4] = [
        SlotKind::Loading,
        SlotKind::Content,
        SlotKind::Empty,
        SlotKind::Error,
    ];

    /// Get the slot's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Content => "Content",
            Self::Empty => "Empty",
            Self::Error => "Error",
        }
    }

    /// Position of this slot in [`SlotKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Content => 1,
            Self::Empty => 2,
            Self::Error => 3,
        }
    }

    /// Whether this slot carries a click action (Empty and Error do).
    pub fn has_action(&self) -> bool {
        matches!(self, Self::Empty | Self::Error)
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The state currently shown by a container.
///
/// `Unset` is the initial state and is never re-entered once a transition
/// has happened. The integer codes match the classic widget contract:
/// Loading=0, Content=1, Empty=2, Error=3, Unset=-1.
///
/// # Example
///
/// ```rust
/// use statepane::core::{ShowState, SlotKind};
///
/// let state = ShowState::default();
/// assert!(state.is_unset());
/// assert_eq!(state.code(), -1);
/// assert_eq!(ShowState::try_from(1), Ok(ShowState::Content));
/// assert_eq!(ShowState::Content.slot(), Some(SlotKind::Content));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowState {
    #[default]
    Unset,
    Loading,
    Content,
    Empty,
    Error,
}

/// Code returned for [`ShowState::Unset`].
pub const UNSET_CODE: i32 = -1;

impl ShowState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unset => "Unset",
            Self::Loading => "Loading",
            Self::Content => "Content",
            Self::Empty => "Empty",
            Self::Error => "Error",
        }
    }

    /// Integer code of this state.
    pub fn code(&self) -> i32 {
        match self {
            Self::Unset => UNSET_CODE,
            Self::Loading => 0,
            Self::Content => 1,
            Self::Empty => 2,
            Self::Error => 3,
        }
    }

    /// The slot this state shows, `None` for `Unset`.
    pub fn slot(&self) -> Option<SlotKind> {
        match self {
            Self::Unset => None,
            Self::Loading => Some(SlotKind::Loading),
            Self::Content => Some(SlotKind::Content),
            Self::Empty => Some(SlotKind::Empty),
            Self::Error => Some(SlotKind::Error),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Check if this state represents a failure shown to the user.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<SlotKind> for ShowState {
    fn from(kind: SlotKind) -> Self {
        match kind {
            SlotKind::Loading => Self::Loading,
            SlotKind::Content => Self::Content,
            SlotKind::Empty => Self::Empty,
            SlotKind::Error => Self::Error,
        }
    }
}

impl PartialEq<SlotKind> for ShowState {
    fn eq(&self, other: &SlotKind) -> bool {
        self.slot() == Some(*other)
    }
}

impl fmt::Display for ShowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer that does not name any show state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown show state code {0}")]
pub struct UnknownStateCode(pub i32);

impl TryFrom<i32> for ShowState {
    type Error = UnknownStateCode;

    fn try_from(code: i32) -> Result<Self, UnknownStateCode> {
        match code {
            UNSET_CODE => Ok(Self::Unset),
            0 => Ok(Self::Loading),
            1 => Ok(Self::Content),
            2 => Ok(Self::Empty),
            3 => Ok(Self::Error),
            other => Err(UnknownStateCode(other)),
        }
    }
}
