//! The state container: slot registry, transitions and callback bindings.
//!
//! This is the imperative shell around [`crate::core`]. It owns the host
//! handle and the four slot views, and is the only place where slot
//! visibility changes.

mod error;
mod machine;
mod ready;
mod slot;

pub use error::ContainerError;
pub use machine::{Registration, StateContainer};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback fired by the container. UI-thread only.
pub type Listener = Rc<dyn Fn()>;

/// The three optional callbacks a container can fire.
#[derive(Clone, Default)]
pub struct Listeners {
    /// Fired once when the content view first has a non-zero size
    pub focus_ready: Option<Listener>,

    /// Fired on clicks inside the Empty view
    pub empty_action: Option<Listener>,

    /// Fired on clicks inside the Error view
    pub error_action: Option<Listener>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("focus_ready", &self.focus_ready.is_some())
            .field("empty_action", &self.empty_action.is_some())
            .field("error_action", &self.error_action.is_some())
            .finish()
    }
}

/// Rebindable listener shared between the container and the bindings it
/// installed. Bindings read it when their event fires, so a later rebind
/// or clear takes effect on views registered earlier.
#[derive(Clone, Default)]
pub(crate) struct ListenerCell(Rc<RefCell<Option<Listener>>>);

impl ListenerCell {
    pub(crate) fn set(&self, listener: Option<Listener>) {
        *self.0.borrow_mut() = listener;
    }

    pub(crate) fn get(&self) -> Option<Listener> {
        self.0.borrow().clone()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Call the current listener, if any. The cell is not borrowed during
    /// the call, so the listener may rebind itself.
    pub(crate) fn fire(&self) {
        if let Some(listener) = self.get() {
            listener();
        }
    }
}

/// The container's live listener cells.
#[derive(Clone, Default)]
pub(crate) struct ListenerCells {
    pub(crate) focus_ready: ListenerCell,
    pub(crate) empty_action: ListenerCell,
    pub(crate) error_action: ListenerCell,
}

impl ListenerCells {
    pub(crate) fn replace(&self, listeners: Listeners) {
        self.focus_ready.set(listeners.focus_ready);
        self.empty_action.set(listeners.empty_action);
        self.error_action.set(listeners.error_action);
    }

    pub(crate) fn snapshot(&self) -> Listeners {
        Listeners {
            focus_ready: self.focus_ready.get(),
            empty_action: self.empty_action.get(),
            error_action: self.error_action.get(),
        }
    }
}
