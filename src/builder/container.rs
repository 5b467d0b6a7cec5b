//! Builder for constructing state containers.

use crate::builder::error::BuildError;
use crate::config::ContainerConfig;
use crate::container::{Listeners, Registration, StateContainer};
use crate::core::SlotKind;
use crate::host::{ElementId, Host, ResourceId};
use std::rc::Rc;
use std::time::Duration;
use stillwater::validation::Validation;

/// Builder for state containers with a fluent API.
///
/// Listeners are installed before any slot is registered, so the
/// registration-order precondition of [`StateContainer`] cannot be violated.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    config: ContainerConfig,
    listeners: Listeners,
}

impl ContainerBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ContainerConfig) -> Self {
        Self {
            config,
            listeners: Listeners::default(),
        }
    }

    /// Set the layout resource of `kind`.
    pub fn slot(mut self, kind: SlotKind, resource: ResourceId) -> Self {
        *self.config.resource_mut(kind) = resource;
        self
    }

    pub fn loading(self, resource: ResourceId) -> Self {
        self.slot(SlotKind::Loading, resource)
    }

    pub fn content(self, resource: ResourceId) -> Self {
        self.slot(SlotKind::Content, resource)
    }

    pub fn empty(self, resource: ResourceId) -> Self {
        self.slot(SlotKind::Empty, resource)
    }

    pub fn error(self, resource: ResourceId) -> Self {
        self.slot(SlotKind::Error, resource)
    }

    pub fn empty_action_element(mut self, element: ElementId) -> Self {
        self.config.empty_action = element;
        self
    }

    pub fn error_action_element(mut self, element: ElementId) -> Self {
        self.config.error_action = element;
        self
    }

    /// Override the host's short animation duration.
    pub fn fade(mut self, duration: Duration) -> Self {
        self.config.fade_millis = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Show `kind` as soon as the container is built.
    pub fn initial(mut self, kind: SlotKind) -> Self {
        self.config.initial = Some(kind);
        self
    }

    pub fn on_focus_ready<F: Fn() + 'static>(mut self, listener: F) -> Self {
        self.listeners.focus_ready = Some(Rc::new(listener));
        self
    }

    pub fn on_empty_action<F: Fn() + 'static>(mut self, listener: F) -> Self {
        self.listeners.empty_action = Some(Rc::new(listener));
        self
    }

    pub fn on_error_action<F: Fn() + 'static>(mut self, listener: F) -> Self {
        self.listeners.error_action = Some(Rc::new(listener));
        self
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Build the container on `host`.
    ///
    /// Fails if the configuration is invalid or the host cannot inflate one
    /// of the configured layouts.
    pub fn build<H: Host>(self, host: H) -> Result<StateContainer<H>, BuildError> {
        if let Validation::Failure(errors) = self.config.validate() {
            return Err(BuildError::InvalidConfig {
                violations: errors.iter().cloned().collect(),
            });
        }

        let mut container = StateContainer::with_config(host, &self.config);
        container.set_listeners(self.listeners);

        for kind in SlotKind::ALL {
            let resource = self.config.resource(kind);
            if container.register_slot(kind, resource) == Registration::InflationFailed {
                return Err(BuildError::InflationFailed {
                    slot: kind,
                    resource,
                });
            }
        }

        if let Some(initial) = self.config.initial {
            container.show(initial);
        }
        Ok(container)
    }
}
