//! In-memory host with no rendering.

use super::{
    ClickHandler, ElementId, Fade, Host, LayoutObserver, ObserverFlow, ResourceId, Size, StringId,
};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Default "short" animation duration, in milliseconds.
const SHORT_ANIMATION_MILLIS: u64 = 200;

/// Handle to a node inflated by a [`HeadlessHost`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// Description of a layout resource: a tree of groups and text elements.
///
/// # Example
///
/// ```rust
/// use statepane::host::{ElementId, Template};
///
/// let empty_layout = Template::group()
///     .child(Template::text("Nothing here").id(ElementId(1)))
///     .child(Template::group().id(ElementId::EMPTY_ACTION));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Template {
    id: Option<ElementId>,
    text: Option<String>,
    children: Vec<Template>,
}

impl Template {
    /// A container element that cannot display text.
    pub fn group() -> Self {
        Self::default()
    }

    /// A text-capable element.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: ElementId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn child(mut self, child: Template) -> Self {
        self.children.push(child);
        self
    }
}

/// A fade started through [`Host::play_fade`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeRecord {
    pub view: NodeId,
    pub fade: Fade,
    pub duration: Duration,
}

struct Node {
    resource: Option<ResourceId>,
    element: Option<ElementId>,
    text: Option<String>,
    children: Vec<NodeId>,
    visible: bool,
    attached: bool,
    click: Option<ClickHandler>,
    observers: Vec<LayoutObserver>,
}

impl Node {
    fn new(template: &Template) -> Self {
        Self {
            resource: None,
            element: template.id,
            text: template.text.clone(),
            children: Vec::new(),
            visible: true,
            attached: false,
            click: None,
            observers: Vec::new(),
        }
    }
}

/// [`Host`] backed by an in-memory node arena.
///
/// Layouts and strings are registered up front; every fade is recorded so
/// callers can assert on animations. Clicks and layout passes are
/// dispatched explicitly with [`HeadlessHost::click`] and
/// [`HeadlessHost::layout`].
///
/// # Example
///
/// ```rust
/// use statepane::host::{HeadlessHost, Host, ResourceId, Template};
///
/// let mut host = HeadlessHost::new();
/// host.define_layout(ResourceId(10), Template::text("Loading..."));
///
/// let view = host.inflate(ResourceId(10)).unwrap();
/// assert_eq!(host.text(view), Some("Loading..."));
/// assert!(host.inflate(ResourceId(99)).is_none());
/// ```
pub struct HeadlessHost {
    layouts: HashMap<ResourceId, Template>,
    strings: HashMap<StringId, String>,
    nodes: Vec<Node>,
    fades: Vec<FadeRecord>,
    short_duration: Duration,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("layouts", &self.layouts.len())
            .field("strings", &self.strings.len())
            .field("nodes", &self.nodes.len())
            .field("fades", &self.fades.len())
            .field("short_duration", &self.short_duration)
            .finish()
    }
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            layouts: HashMap::new(),
            strings: HashMap::new(),
            nodes: Vec::new(),
            fades: Vec::new(),
            short_duration: Duration::from_millis(SHORT_ANIMATION_MILLIS),
        }
    }

    /// Override the duration reported by [`Host::short_animation_duration`].
    pub fn with_short_duration(mut self, duration: Duration) -> Self {
        self.short_duration = duration;
        self
    }

    /// Register the layout inflated for `resource`.
    pub fn define_layout(&mut self, resource: ResourceId, template: Template) -> &mut Self {
        self.layouts.insert(resource, template);
        self
    }

    pub fn define_string(&mut self, id: StringId, value: impl Into<String>) -> &mut Self {
        self.strings.insert(id, value.into());
        self
    }

    /// Number of layout resources inflated so far.
    pub fn inflation_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.resource.is_some()).count()
    }

    /// Resource a root node was inflated from.
    pub fn resource_of(&self, node: NodeId) -> Option<ResourceId> {
        self.nodes.get(node.0).and_then(|n| n.resource)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| n.text.as_deref())
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.visible)
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.attached)
    }

    /// Every fade played so far, oldest first.
    pub fn fades(&self) -> &[FadeRecord] {
        &self.fades
    }

    /// Drain the recorded fades.
    pub fn take_fades(&mut self) -> Vec<FadeRecord> {
        std::mem::take(&mut self.fades)
    }

    /// Clone of the click handler bound to `node`.
    pub fn click_handler(&self, node: NodeId) -> Option<ClickHandler> {
        self.nodes.get(node.0).and_then(|n| n.click.clone())
    }

    /// Deliver a click to `node`. Returns `false` if nothing is bound to it.
    pub fn click(&self, node: NodeId) -> bool {
        match self.click_handler(node) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Run one layout pass of `node` with the given measured size.
    ///
    /// A hidden node measures as [`Size::ZERO`] whatever size is given.
    /// Observers returning [`ObserverFlow::Detach`] are dropped. Returns the
    /// number of observers notified.
    pub fn layout(&mut self, node: NodeId, size: Size) -> usize {
        let Some(entry) = self.nodes.get_mut(node.0) else {
            return 0;
        };
        let size = if entry.visible { size } else { Size::ZERO };
        let observers = std::mem::take(&mut entry.observers);
        let notified = observers.len();
        let kept: Vec<LayoutObserver> = observers
            .into_iter()
            .filter_map(|mut observer| match observer(size) {
                ObserverFlow::Continue => Some(observer),
                ObserverFlow::Detach => None,
            })
            .collect();
        entry.observers = kept;
        notified
    }

    pub fn observer_count(&self, node: NodeId) -> usize {
        self.nodes.get(node.0).map_or(0, |n| n.observers.len())
    }

    fn build(&mut self, template: &Template) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(template));
        for child in &template.children {
            let child_id = self.build(child);
            self.nodes[id.0].children.push(child_id);
        }
        id
    }
}

impl Host for HeadlessHost {
    type View = NodeId;

    fn inflate(&mut self, resource: ResourceId) -> Option<NodeId> {
        let template = self.layouts.get(&resource)?.clone();
        let root = self.build(&template);
        self.nodes[root.0].resource = Some(resource);
        Some(root)
    }

    fn attach(&mut self, view: &NodeId) {
        if let Some(node) = self.nodes.get_mut(view.0) {
            node.attached = true;
        }
    }

    fn find_descendant(&self, root: &NodeId, id: ElementId) -> Option<NodeId> {
        let mut stack = vec![*root];
        while let Some(current) = stack.pop() {
            let node = self.nodes.get(current.0)?;
            if node.element == Some(id) {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn set_text(&mut self, view: &NodeId, text: &str) -> bool {
        match self.nodes.get_mut(view.0).and_then(|n| n.text.as_mut()) {
            Some(current) => {
                text.clone_into(current);
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, view: &NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(view.0) {
            node.visible = visible;
        }
    }

    fn play_fade(&mut self, view: &NodeId, fade: Fade, duration: Duration) {
        self.fades.push(FadeRecord {
            view: *view,
            fade,
            duration,
        });
    }

    fn string(&self, id: StringId) -> Option<String> {
        self.strings.get(&id).cloned()
    }

    fn short_animation_duration(&self) -> Duration {
        self.short_duration
    }

    fn set_click_handler(&mut self, view: &NodeId, handler: ClickHandler) {
        if let Some(node) = self.nodes.get_mut(view.0) {
            node.click = Some(handler);
        }
    }

    fn observe_layout(&mut self, view: &NodeId, observer: LayoutObserver) {
        if let Some(node) = self.nodes.get_mut(view.0) {
            node.observers.push(observer);
        }
    }
}
