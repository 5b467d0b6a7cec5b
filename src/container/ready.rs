//! One-shot "content is laid out with a real size" detection.

use crate::container::ListenerCell;
use crate::host::{LayoutObserver, ObserverFlow, Size};

/// Watches layout passes of the content view and fires the focus-ready
/// listener on the first pass where both dimensions are non-zero.
///
/// The listener is read from its cell at that moment, so rebinding or
/// clearing it after registration is honoured. Once fired, the detector
/// only asks to be detached, so a host that delivers more passes before it
/// processes the detach still cannot fire it twice.
pub(crate) struct ReadyDetector {
    listener: ListenerCell,
    fired: bool,
}

impl ReadyDetector {
    pub(crate) fn new(listener: ListenerCell) -> Self {
        Self {
            listener,
            fired: false,
        }
    }

    pub(crate) fn on_layout(&mut self, size: Size) -> ObserverFlow {
        if self.fired {
            return ObserverFlow::Detach;
        }
        if !size.is_nonzero() {
            return ObserverFlow::Continue;
        }
        self.fired = true;
        tracing::debug!(
            width = size.width,
            height = size.height,
            "content ready, detaching layout observer"
        );
        self.listener.fire();
        ObserverFlow::Detach
    }

    pub(crate) fn into_observer(mut self) -> LayoutObserver {
        Box::new(move |size| self.on_layout(size))
    }
}
