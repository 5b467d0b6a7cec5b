//! Bounded tracking of show-state transitions.

use super::state::{ShowState, SlotKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions kept by a container.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Record of a single effective transition.
///
/// Only transitions that changed the current state are recorded; guarded
/// self-loops never appear here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: ShowState,
    /// The slot being shown
    pub to: SlotKind,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions, oldest first.
///
/// The history keeps at most `limit` entries and drops the oldest one when
/// full. A limit of zero disables recording.
///
/// # Example
///
/// ```rust
/// use statepane::core::{ShowState, SlotKind, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition {
///     from: ShowState::Unset,
///     to: SlotKind::Loading,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: ShowState::Loading,
///     to: SlotKind::Content,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![ShowState::Unset, ShowState::Loading, ShowState::Content]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    limit: usize,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    /// Create an empty history with [`DEFAULT_HISTORY_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Maximum number of transitions kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` state of the oldest retained transition, then
    /// the target of each transition in order.
    pub fn get_path(&self) -> Vec<ShowState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| ShowState::from(t.to)));
        path
    }

    /// Time between the oldest and newest retained transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
