//! A single lazily populated view slot and its fade primitives.

use crate::host::{Fade, Host};
use std::time::Duration;

/// Optional view handle plus the slot's own visibility flag.
///
/// The flag is the only guard against redundant animations: revealing a
/// visible slot or concealing a hidden one does nothing.
#[derive(Debug)]
pub(crate) struct Slot<V> {
    view: Option<V>,
    visible: bool,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            view: None,
            visible: false,
        }
    }
}

impl<V: Clone> Slot<V> {
    pub(crate) fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.view.is_some()
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    /// Store `view` if the slot is still empty. First fill wins.
    pub(crate) fn fill(&mut self, view: V) -> bool {
        if self.view.is_some() {
            return false;
        }
        self.view = Some(view);
        self.visible = false;
        true
    }

    /// Show the slot with a fade-in. Returns `true` if an animation started.
    pub(crate) fn reveal<H>(&mut self, host: &mut H, duration: Duration) -> bool
    where
        H: Host<View = V>,
    {
        self.switch(host, true, duration)
    }

    /// Hide the slot with a fade-out. Returns `true` if an animation started.
    pub(crate) fn conceal<H>(&mut self, host: &mut H, duration: Duration) -> bool
    where
        H: Host<View = V>,
    {
        self.switch(host, false, duration)
    }

    fn switch<H>(&mut self, host: &mut H, visible: bool, duration: Duration) -> bool
    where
        H: Host<View = V>,
    {
        let Some(view) = self.view.as_ref() else {
            return false;
        };
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        host.set_visible(view, visible);
        let fade = if visible { Fade::In } else { Fade::Out };
        host.play_fade(view, fade, duration);
        true
    }
}
