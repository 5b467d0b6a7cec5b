//! The UI toolkit collaborator.
//!
//! A container never renders anything itself. Everything it needs from the
//! toolkit (inflating a layout resource, toggling visibility, playing a fade,
//! binding clicks, observing layout passes) goes through the [`Host`] trait.
//! [`HeadlessHost`] is an in-memory implementation for tests and for screens
//! driven without a real toolkit.

mod headless;

pub use headless::{FadeRecord, HeadlessHost, NodeId, Template};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::rc::Rc;
use std::time::Duration;

/// Layout resource identifier. `ResourceId(0)` means "no view".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub const NONE: ResourceId = ResourceId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// Identifier of a descendant element inside an inflated view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Well-known id of the clickable element inside an Empty view.
    pub const EMPTY_ACTION: ElementId = ElementId(0x7f0a_0e01);
    /// Well-known id of the clickable element inside an Error view.
    pub const ERROR_ACTION: ElementId = ElementId(0x7f0a_0e02);
}

/// String resource identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringId(pub u32);

/// Measured size of a view after a layout pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are non-zero.
    pub fn is_nonzero(&self) -> bool {
        self.width != 0 && self.height != 0
    }
}

/// Direction of a crossfade.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fade {
    In,
    Out,
}

/// What a layout observer wants after handling a pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObserverFlow {
    /// Keep receiving layout passes
    Continue,

    /// Unregister this observer; the host must not call it again
    Detach,
}

/// Click handler bound to a view. Shared so hosts can dispatch it without
/// holding a borrow on their own state.
pub type ClickHandler = Rc<dyn Fn()>;

/// Layout observer attached to a view.
pub type LayoutObserver = Box<dyn FnMut(Size) -> ObserverFlow>;

/// Operations a UI toolkit exposes to a container.
///
/// All calls happen on the UI thread. View handles are cheap clones
/// (an id, an `Rc`, ...) owned by the container once inflated.
///
/// Hosts with several observer removal APIs (for example one per platform
/// version) pick one when they are created; the container only ever returns
/// [`ObserverFlow::Detach`].
pub trait Host {
    /// Handle to a view in the host's tree.
    type View: Clone + PartialEq + Debug;

    /// Inflate the layout `resource`. `None` if the host does not know it.
    fn inflate(&mut self, resource: ResourceId) -> Option<Self::View>;

    /// Attach `view` to the container, sized to fill it.
    fn attach(&mut self, view: &Self::View);

    /// Find `id` in the subtree rooted at `root`, `root` included.
    fn find_descendant(&self, root: &Self::View, id: ElementId) -> Option<Self::View>;

    /// Replace the displayed text of `view`.
    ///
    /// Returns `false` and leaves the view unchanged if it cannot show text.
    fn set_text(&mut self, view: &Self::View, text: &str) -> bool;

    fn set_visible(&mut self, view: &Self::View, visible: bool);

    /// Start a fade animation on `view`. Fire-and-forget.
    fn play_fade(&mut self, view: &Self::View, fade: Fade, duration: Duration);

    /// Look up a string resource.
    fn string(&self, id: StringId) -> Option<String>;

    /// The toolkit's "short" animation duration.
    fn short_animation_duration(&self) -> Duration;

    /// Bind `handler` to clicks on `view`, replacing any previous handler.
    fn set_click_handler(&mut self, view: &Self::View, handler: ClickHandler);

    /// Register `observer` for layout passes of `view`.
    ///
    /// The host calls it after every pass until it returns
    /// [`ObserverFlow::Detach`].
    fn observe_layout(&mut self, view: &Self::View, observer: LayoutObserver);
}
