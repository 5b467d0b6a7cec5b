//! Declarative container configuration.
//!
//! A `ContainerConfig` names the layout resource of each slot, the action
//! element ids, and a few tuning knobs. It can be loaded from JSON and is
//! checked with [`ContainerConfig::validate`], which reports every problem
//! at once instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use statepane::config::ContainerConfig;
//! use statepane::host::ResourceId;
//! use statepane::SlotKind;
//!
//! let config = ContainerConfig::from_json(
//!     r#"{ "loading": 10, "content": 11, "initial": "loading" }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.resource(SlotKind::Content), ResourceId(11));
//! assert!(config.validate().is_success());
//! ```

mod error;
mod validation;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{SlotKind, DEFAULT_HISTORY_LIMIT};
use crate::host::{ElementId, ResourceId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration applied by [`crate::ContainerBuilder`].
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Layout of the Loading slot (0 = none)
    pub loading: ResourceId,
    /// Layout of the Content slot (0 = none)
    pub content: ResourceId,
    /// Layout of the Empty slot (0 = none)
    pub empty: ResourceId,
    /// Layout of the Error slot (0 = none)
    pub error: ResourceId,

    /// Element inside the Empty view that receives the action click
    pub empty_action: ElementId,
    /// Element inside the Error view that receives the action click
    pub error_action: ElementId,

    /// Crossfade duration; the host's short duration when absent
    pub fade_millis: Option<u64>,

    /// Number of transitions kept in history (0 disables it)
    pub history_limit: usize,

    /// Slot shown right after the container is built
    pub initial: Option<SlotKind>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            loading: ResourceId::NONE,
            content: ResourceId::NONE,
            empty: ResourceId::NONE,
            error: ResourceId::NONE,
            empty_action: ElementId::EMPTY_ACTION,
            error_action: ElementId::ERROR_ACTION,
            fade_millis: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            initial: None,
        }
    }
}

impl ContainerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Layout resource configured for `kind`.
    pub fn resource(&self, kind: SlotKind) -> ResourceId {
        match kind {
            SlotKind::Loading => self.loading,
            SlotKind::Content => self.content,
            SlotKind::Empty => self.empty,
            SlotKind::Error => self.error,
        }
    }

    pub(crate) fn resource_mut(&mut self, kind: SlotKind) -> &mut ResourceId {
        match kind {
            SlotKind::Loading => &mut self.loading,
            SlotKind::Content => &mut self.content,
            SlotKind::Empty => &mut self.empty,
            SlotKind::Error => &mut self.error,
        }
    }

    /// Action element id for Empty/Error, `None` for the other slots.
    pub fn action_element(&self, kind: SlotKind) -> Option<ElementId> {
        match kind {
            SlotKind::Empty => Some(self.empty_action),
            SlotKind::Error => Some(self.error_action),
            SlotKind::Loading | SlotKind::Content => None,
        }
    }

    pub fn fade_duration(&self) -> Option<Duration> {
        self.fade_millis.map(Duration::from_millis)
    }
}
