//! Container that registers slot views and drives transitions between them.

use crate::config::ContainerConfig;
use crate::container::error::ContainerError;
use crate::container::ready::ReadyDetector;
use crate::container::slot::Slot;
use crate::container::{ListenerCell, ListenerCells, Listeners};
use crate::core::{ShowState, SlotKind, StateHistory, StateTransition};
use crate::host::{ElementId, Host, ResourceId, StringId};
use chrono::Utc;
use std::rc::Rc;
use std::time::Duration;

/// Outcome of registering a slot view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The view was inflated, attached hidden and stored
    Inflated,

    /// The slot already holds a view; the first registration wins
    AlreadyRegistered,

    /// Resource id 0, nothing to inflate
    NoResource,

    /// The host could not inflate the resource
    InflationFailed,
}

impl Registration {
    pub fn is_inflated(&self) -> bool {
        matches!(self, Self::Inflated)
    }
}

/// A view container showing exactly one of four slots.
///
/// Views are inflated lazily, at most once per slot, and start hidden.
/// `show_*` calls conceal every other slot and reveal the target with a
/// crossfade; showing the current state again does nothing.
///
/// Listeners must be configured before the slot they belong to is
/// registered: click bindings and the content ready detector are installed
/// at registration time and are never attached retroactively. Once
/// installed, a binding fires whatever listener is current when the event
/// arrives, so rebinding or clearing later is honoured.
/// [`crate::ContainerBuilder`] takes care of this ordering.
///
/// # Example
///
/// ```rust
/// use statepane::host::{HeadlessHost, ResourceId, Template};
/// use statepane::{ShowState, SlotKind, StateContainer};
///
/// let mut host = HeadlessHost::new();
/// host.define_layout(ResourceId(10), Template::group());
///
/// let mut container = StateContainer::new(host);
/// assert!(container.register_loading_view(ResourceId(10)).is_inflated());
/// assert_eq!(container.current_state(), ShowState::Unset);
///
/// assert!(container.show_loading());
/// assert!(!container.show_loading());
/// assert_eq!(container.visible_slot(), Some(SlotKind::Loading));
/// ```
pub struct StateContainer<H: Host> {
    host: H,
    slots: [Slot<H::View>; 4],
    current: ShowState,
    listeners: ListenerCells,
    empty_action: ElementId,
    error_action: ElementId,
    fade: Duration,
    history: StateHistory,
}

impl<H: Host> StateContainer<H> {
    /// Create an empty container using the host's short animation duration.
    pub fn new(host: H) -> Self {
        let fade = host.short_animation_duration();
        Self {
            host,
            slots: std::array::from_fn(|_| Slot::default()),
            current: ShowState::Unset,
            listeners: ListenerCells::default(),
            empty_action: ElementId::EMPTY_ACTION,
            error_action: ElementId::ERROR_ACTION,
            fade,
            history: StateHistory::new(),
        }
    }

    /// Create an empty container with the settings of `config`.
    ///
    /// Slot resources and the initial state in `config` are not applied
    /// here; see [`crate::ContainerBuilder::build`].
    pub(crate) fn with_config(host: H, config: &ContainerConfig) -> Self {
        let mut container = Self::new(host);
        container.empty_action = config.empty_action;
        container.error_action = config.error_action;
        if let Some(fade) = config.fade_duration() {
            container.fade = fade;
        }
        container.history = StateHistory::with_limit(config.history_limit);
        container
    }

    // ---- listeners ----

    /// Fired once when the content view first lays out with a non-zero
    /// size. Must be set before [`Self::register_content_view`] for the
    /// detector to be installed.
    pub fn set_focus_ready_listener<F: Fn() + 'static>(&mut self, listener: F) {
        self.listeners.focus_ready.set(Some(Rc::new(listener)));
    }

    /// Fired on clicks in the Empty view. Must be set before
    /// [`Self::register_empty_view`] for the click binding to be installed.
    pub fn set_empty_action_listener<F: Fn() + 'static>(&mut self, listener: F) {
        self.listeners.empty_action.set(Some(Rc::new(listener)));
    }

    /// Fired on clicks in the Error view. Must be set before
    /// [`Self::register_error_view`] for the click binding to be installed.
    pub fn set_error_action_listener<F: Fn() + 'static>(&mut self, listener: F) {
        self.listeners.error_action.set(Some(Rc::new(listener)));
    }

    /// Turn an installed focus-ready detector into a no-op.
    pub fn clear_focus_ready_listener(&mut self) {
        self.listeners.focus_ready.set(None);
    }

    pub fn clear_empty_action_listener(&mut self) {
        self.listeners.empty_action.set(None);
    }

    pub fn clear_error_action_listener(&mut self) {
        self.listeners.error_action.set(None);
    }

    pub(crate) fn set_listeners(&mut self, listeners: Listeners) {
        self.listeners.replace(listeners);
    }

    /// Listeners currently bound.
    pub fn listeners(&self) -> Listeners {
        self.listeners.snapshot()
    }

    // ---- slot registry ----

    /// Inflate and store the view for `kind`.
    ///
    /// Does nothing if the slot already holds a view or `resource` is 0.
    /// The view is attached to the container hidden. For Empty and Error
    /// the configured action listener is bound to the action element, or
    /// to the whole view if it has none; for Content the focus-ready
    /// detector is installed.
    pub fn register_slot(&mut self, kind: SlotKind, resource: ResourceId) -> Registration {
        if self.slots[kind.index()].is_registered() {
            tracing::debug!(slot = kind.name(), ?resource, "slot already registered, ignoring");
            return Registration::AlreadyRegistered;
        }
        if resource.is_none() {
            return Registration::NoResource;
        }
        let Some(view) = self.host.inflate(resource) else {
            tracing::warn!(slot = kind.name(), ?resource, "host could not inflate slot view");
            return Registration::InflationFailed;
        };

        self.host.set_visible(&view, false);
        match kind {
            SlotKind::Content => self.watch_content(&view),
            kind if kind.has_action() => self.bind_action(kind, &view),
            _ => {}
        }
        self.host.attach(&view);
        self.slots[kind.index()].fill(view);

        tracing::debug!(slot = kind.name(), ?resource, "registered slot view");
        Registration::Inflated
    }

    pub fn register_loading_view(&mut self, resource: ResourceId) -> Registration {
        self.register_slot(SlotKind::Loading, resource)
    }

    pub fn register_content_view(&mut self, resource: ResourceId) -> Registration {
        self.register_slot(SlotKind::Content, resource)
    }

    pub fn register_empty_view(&mut self, resource: ResourceId) -> Registration {
        self.register_slot(SlotKind::Empty, resource)
    }

    pub fn register_error_view(&mut self, resource: ResourceId) -> Registration {
        self.register_slot(SlotKind::Error, resource)
    }

    fn watch_content(&mut self, view: &H::View) {
        let cell = self.listeners.focus_ready.clone();
        if cell.is_set() {
            self.host
                .observe_layout(view, ReadyDetector::new(cell).into_observer());
        }
    }

    fn bind_action(&mut self, kind: SlotKind, view: &H::View) {
        let (cell, element): (&ListenerCell, ElementId) = match kind {
            SlotKind::Empty => (&self.listeners.empty_action, self.empty_action),
            SlotKind::Error => (&self.listeners.error_action, self.error_action),
            SlotKind::Loading | SlotKind::Content => return,
        };
        if !cell.is_set() {
            return;
        }
        let cell = cell.clone();
        let target = self
            .host
            .find_descendant(view, element)
            .unwrap_or_else(|| view.clone());
        self.host.set_click_handler(&target, Rc::new(move || cell.fire()));
    }

    // ---- state machine ----

    /// Transition to `target`.
    ///
    /// Returns `false` without touching any view if `target` is already
    /// current. Otherwise every other slot is concealed, then `target` is
    /// revealed. Slots without a view are skipped, so showing an
    /// unregistered slot leaves nothing visible.
    pub fn show(&mut self, target: SlotKind) -> bool {
        if self.current == target {
            return false;
        }
        let from = self.current;
        self.current = ShowState::from(target);

        for kind in SlotKind::ALL {
            if kind != target {
                self.slots[kind.index()].conceal(&mut self.host, self.fade);
            }
        }
        let slot = &mut self.slots[target.index()];
        slot.reveal(&mut self.host, self.fade);
        if !slot.is_registered() {
            tracing::warn!(slot = target.name(), "showing a slot that was never registered");
        }

        self.history.record(StateTransition {
            from,
            to: target,
            timestamp: Utc::now(),
        });
        tracing::debug!(from = from.name(), to = target.name(), "state transition");
        true
    }

    pub fn show_loading(&mut self) -> bool {
        self.show(SlotKind::Loading)
    }

    pub fn show_content(&mut self) -> bool {
        self.show(SlotKind::Content)
    }

    pub fn show_empty(&mut self) -> bool {
        self.show(SlotKind::Empty)
    }

    pub fn show_error(&mut self) -> bool {
        self.show(SlotKind::Error)
    }

    /// Set the text of `element` in the Empty view, then show Empty.
    ///
    /// A missing or non-text element is ignored; the transition happens
    /// regardless.
    pub fn show_empty_with_text(&mut self, element: ElementId, text: &str) -> bool {
        self.show_with_text(SlotKind::Empty, element, text)
    }

    /// Like [`Self::show_empty_with_text`] with a string resource.
    ///
    /// Fails without transitioning if the host has no such string.
    pub fn show_empty_with_string(
        &mut self,
        element: ElementId,
        string: StringId,
    ) -> Result<bool, ContainerError> {
        let text = self.resolve_string(string)?;
        Ok(self.show_with_text(SlotKind::Empty, element, &text))
    }

    /// Set the text of `element` in the Error view, then show Error.
    pub fn show_error_with_text(&mut self, element: ElementId, text: &str) -> bool {
        self.show_with_text(SlotKind::Error, element, text)
    }

    pub fn show_error_with_string(
        &mut self,
        element: ElementId,
        string: StringId,
    ) -> Result<bool, ContainerError> {
        let text = self.resolve_string(string)?;
        Ok(self.show_with_text(SlotKind::Error, element, &text))
    }

    /// Replace the text of `element` inside the view of `kind`.
    pub fn set_slot_text(
        &mut self,
        kind: SlotKind,
        element: ElementId,
        text: &str,
    ) -> Result<(), ContainerError> {
        let root = self.slots[kind.index()]
            .view()
            .ok_or(ContainerError::SlotNotRegistered { slot: kind })?;
        let target = self
            .host
            .find_descendant(root, element)
            .ok_or(ContainerError::ElementNotFound {
                slot: kind,
                element,
            })?;
        if self.host.set_text(&target, text) {
            Ok(())
        } else {
            Err(ContainerError::NotTextCapable {
                slot: kind,
                element,
            })
        }
    }

    fn show_with_text(&mut self, kind: SlotKind, element: ElementId, text: &str) -> bool {
        match self.set_slot_text(kind, element, text) {
            Ok(()) => {}
            Err(err @ ContainerError::SlotNotRegistered { .. }) => {
                tracing::warn!("skipping text update: {}", err);
            }
            Err(err) => tracing::debug!("skipping text update: {}", err),
        }
        self.show(kind)
    }

    fn resolve_string(&self, string: StringId) -> Result<String, ContainerError> {
        self.host
            .string(string)
            .ok_or(ContainerError::StringNotFound(string))
    }

    // ---- inspection ----

    /// Current state, `Unset` before the first transition.
    pub fn current_state(&self) -> ShowState {
        self.current
    }

    /// Integer code of the current state (-1 while unset).
    pub fn current_state_code(&self) -> i32 {
        self.current.code()
    }

    pub fn is_registered(&self, kind: SlotKind) -> bool {
        self.slots[kind.index()].is_registered()
    }

    pub fn is_visible(&self, kind: SlotKind) -> bool {
        self.slots[kind.index()].is_visible()
    }

    /// The slot currently visible, if any.
    pub fn visible_slot(&self) -> Option<SlotKind> {
        SlotKind::ALL.into_iter().find(|kind| self.is_visible(*kind))
    }

    /// View handle stored for `kind`.
    pub fn view(&self, kind: SlotKind) -> Option<&H::View> {
        self.slots[kind.index()].view()
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Duration used for every crossfade.
    pub fn fade_duration(&self) -> Duration {
        self.fade
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Fade, HeadlessHost, NodeId, Size, Template};
    use std::cell::Cell;

    const LOADING: ResourceId = ResourceId(10);
    const CONTENT: ResourceId = ResourceId(11);
    const EMPTY: ResourceId = ResourceId(12);
    const ERROR: ResourceId = ResourceId(13);
    const MESSAGE: ElementId = ElementId(1);
    const ICON: ElementId = ElementId(2);

    fn host() -> HeadlessHost {
        let mut host = HeadlessHost::new();
        host.define_layout(LOADING, Template::text("Loading..."))
            .define_layout(CONTENT, Template::group())
            .define_layout(
                EMPTY,
                Template::group()
                    .child(Template::text("Nothing here").id(MESSAGE))
                    .child(Template::group().id(ICON))
                    .child(Template::text("Refresh").id(ElementId::EMPTY_ACTION)),
            )
            .define_layout(
                ERROR,
                Template::group().child(Template::text("Failed").id(MESSAGE)),
            )
            .define_string(StringId(100), "Try again later");
        host
    }

    fn registered() -> StateContainer<HeadlessHost> {
        let mut container = StateContainer::new(host());
        container.register_loading_view(LOADING);
        container.register_content_view(CONTENT);
        container.register_empty_view(EMPTY);
        container.register_error_view(ERROR);
        container
    }

    fn view(container: &StateContainer<HeadlessHost>, kind: SlotKind) -> NodeId {
        *container.view(kind).unwrap()
    }

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn new_container_is_unset() {
        let container = StateContainer::new(host());
        assert_eq!(container.current_state(), ShowState::Unset);
        assert_eq!(container.current_state_code(), -1);
        assert_eq!(container.visible_slot(), None);
        assert!(container.history().is_empty());
        assert_eq!(container.fade_duration(), Duration::from_millis(200));
    }

    #[test]
    fn zero_resource_is_ignored() {
        let mut container = StateContainer::new(host());
        assert_eq!(
            container.register_loading_view(ResourceId::NONE),
            Registration::NoResource
        );
        assert!(!container.is_registered(SlotKind::Loading));
        assert_eq!(container.host().inflation_count(), 0);
    }

    #[test]
    fn first_registration_wins() {
        let mut container = StateContainer::new(host());
        assert!(container.register_content_view(CONTENT).is_inflated());
        let first = view(&container, SlotKind::Content);

        assert_eq!(
            container.register_content_view(LOADING),
            Registration::AlreadyRegistered
        );
        assert_eq!(view(&container, SlotKind::Content), first);
        assert_eq!(container.host().resource_of(first), Some(CONTENT));
        assert_eq!(container.host().inflation_count(), 1);
    }

    #[test]
    fn unknown_resource_fails_and_slot_stays_open() {
        let mut container = StateContainer::new(host());
        assert_eq!(
            container.register_error_view(ResourceId(77)),
            Registration::InflationFailed
        );
        assert!(!container.is_registered(SlotKind::Error));
        assert!(container.register_error_view(ERROR).is_inflated());
    }

    #[test]
    fn registered_views_start_hidden_and_attached() {
        let container = registered();
        for kind in SlotKind::ALL {
            let node = view(&container, kind);
            assert!(!container.is_visible(kind));
            assert!(!container.host().is_visible(node));
            assert!(container.host().is_attached(node));
        }
        assert!(container.host().fades().is_empty());
    }

    #[test]
    fn show_conceals_others_before_revealing_target() {
        let mut container = registered();
        assert!(container.show_loading());
        container.host_mut().take_fades();

        assert!(container.show_content());
        let fades: Vec<_> = container
            .host()
            .fades()
            .iter()
            .map(|f| (f.view, f.fade))
            .collect();
        assert_eq!(
            fades,
            vec![
                (view(&container, SlotKind::Loading), Fade::Out),
                (view(&container, SlotKind::Content), Fade::In),
            ]
        );
        assert_eq!(container.current_state(), ShowState::Content);
        assert_eq!(container.visible_slot(), Some(SlotKind::Content));
        assert!(!container.host().is_visible(view(&container, SlotKind::Loading)));
    }

    #[test]
    fn repeated_show_is_a_no_op() {
        let mut container = registered();
        assert!(container.show_error());
        let fades = container.host().fades().len();

        assert!(!container.show_error());
        assert_eq!(container.host().fades().len(), fades);
        assert_eq!(container.history().len(), 1);
    }

    #[test]
    fn fades_use_the_host_duration() {
        let mut container =
            StateContainer::new(host().with_short_duration(Duration::from_millis(120)));
        container.register_loading_view(LOADING);
        container.show_loading();
        assert_eq!(
            container.host().fades()[0].duration,
            Duration::from_millis(120)
        );
    }

    #[test]
    fn showing_unregistered_slot_leaves_nothing_visible() {
        let mut container = StateContainer::new(host());
        container.register_loading_view(LOADING);
        container.show_loading();

        assert!(container.show_error());
        assert_eq!(container.current_state(), ShowState::Error);
        assert_eq!(container.visible_slot(), None);
    }

    #[test]
    fn empty_action_binds_to_action_element() {
        let (clicks, listener) = counter();
        let mut container = StateContainer::new(host());
        container.set_empty_action_listener(listener);
        container.register_empty_view(EMPTY);

        let root = view(&container, SlotKind::Empty);
        let action = container
            .host()
            .find_descendant(&root, ElementId::EMPTY_ACTION)
            .unwrap();
        assert!(!container.host().click(root));
        assert!(container.host().click(action));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn error_action_falls_back_to_root() {
        let (clicks, listener) = counter();
        let mut container = StateContainer::new(host());
        container.set_error_action_listener(listener);
        container.register_error_view(ERROR);

        assert!(container.host().click(view(&container, SlotKind::Error)));
        assert!(container.host().click(view(&container, SlotKind::Error)));
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn late_listener_is_not_attached() {
        let (clicks, listener) = counter();
        let mut container = StateContainer::new(host());
        container.register_error_view(ERROR);
        container.set_error_action_listener(listener);

        assert!(!container.host().click(view(&container, SlotKind::Error)));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn rebound_action_listener_replaces_the_old_one() {
        let (old, first) = counter();
        let (new, second) = counter();
        let mut container = StateContainer::new(host());
        container.set_error_action_listener(first);
        container.register_error_view(ERROR);
        container.set_error_action_listener(second);

        assert!(container.host().click(view(&container, SlotKind::Error)));
        assert_eq!(old.get(), 0);
        assert_eq!(new.get(), 1);
    }

    #[test]
    fn rebound_empty_listener_reaches_the_action_element() {
        let (old, first) = counter();
        let (new, second) = counter();
        let mut container = StateContainer::new(host());
        container.set_empty_action_listener(first);
        container.register_empty_view(EMPTY);
        container.set_empty_action_listener(second);

        let root = view(&container, SlotKind::Empty);
        let action = container
            .host()
            .find_descendant(&root, ElementId::EMPTY_ACTION)
            .unwrap();
        assert!(container.host().click(action));
        assert_eq!(old.get(), 0);
        assert_eq!(new.get(), 1);
    }

    #[test]
    fn cleared_action_listener_is_a_no_op() {
        let (clicks, listener) = counter();
        let mut container = StateContainer::new(host());
        container.set_empty_action_listener(listener);
        container.register_empty_view(EMPTY);
        container.clear_empty_action_listener();

        let root = view(&container, SlotKind::Empty);
        let action = container
            .host()
            .find_descendant(&root, ElementId::EMPTY_ACTION)
            .unwrap();
        container.host().click(action);
        assert_eq!(clicks.get(), 0);
        assert!(container.listeners().empty_action.is_none());
    }

    #[test]
    fn rebound_focus_listener_fires_instead_of_the_old_one() {
        let (old, first) = counter();
        let (new, second) = counter();
        let mut container = StateContainer::new(host());
        container.set_focus_ready_listener(first);
        container.register_content_view(CONTENT);
        container.set_focus_ready_listener(second);
        let content = view(&container, SlotKind::Content);
        container.show_content();

        container.host_mut().layout(content, Size::new(10, 10));
        assert_eq!(old.get(), 0);
        assert_eq!(new.get(), 1);
    }

    #[test]
    fn focus_ready_waits_until_content_is_shown() {
        let (ready, listener) = counter();
        let mut container = StateContainer::new(host());
        container.set_focus_ready_listener(listener);
        container.register_content_view(CONTENT);
        let content = view(&container, SlotKind::Content);

        container.host_mut().layout(content, Size::new(320, 480));
        assert_eq!(ready.get(), 0);
        container.show_content();
        container.host_mut().layout(content, Size::new(320, 480));
        assert_eq!(ready.get(), 1);
    }

    #[test]
    fn focus_ready_fires_once_on_first_sized_layout() {
        let (ready, listener) = counter();
        let mut container = StateContainer::new(host());
        container.set_focus_ready_listener(listener);
        container.register_content_view(CONTENT);
        let content = view(&container, SlotKind::Content);
        container.show_content();

        container.host_mut().layout(content, Size::ZERO);
        assert_eq!(ready.get(), 0);
        container.host_mut().layout(content, Size::new(320, 480));
        container.host_mut().layout(content, Size::new(320, 480));
        assert_eq!(ready.get(), 1);
        assert_eq!(container.host().observer_count(content), 0);
    }

    #[test]
    fn no_detector_without_focus_listener() {
        let container = registered();
        let content = view(&container, SlotKind::Content);
        assert_eq!(container.host().observer_count(content), 0);
    }

    #[test]
    fn show_empty_with_text_updates_message() {
        let mut container = registered();
        assert!(container.show_empty_with_text(MESSAGE, "No results"));

        let root = view(&container, SlotKind::Empty);
        let message = container.host().find_descendant(&root, MESSAGE).unwrap();
        assert_eq!(container.host().text(message), Some("No results"));
        assert_eq!(container.current_state(), ShowState::Empty);
    }

    #[test]
    fn missing_or_non_text_element_still_transitions() {
        let mut container = registered();
        assert!(container.show_empty_with_text(ElementId(99), "ignored"));
        assert_eq!(container.current_state(), ShowState::Empty);

        assert!(container.show_loading());
        assert!(container.show_empty_with_text(ICON, "ignored"));
        assert_eq!(container.current_state(), ShowState::Empty);
        assert_eq!(
            container.set_slot_text(SlotKind::Empty, ICON, "x"),
            Err(ContainerError::NotTextCapable {
                slot: SlotKind::Empty,
                element: ICON,
            })
        );
    }

    #[test]
    fn text_update_on_unregistered_slot_is_skipped() {
        let mut container = StateContainer::new(host());
        assert_eq!(
            container.set_slot_text(SlotKind::Empty, MESSAGE, "x"),
            Err(ContainerError::SlotNotRegistered {
                slot: SlotKind::Empty
            })
        );
        assert!(container.show_empty_with_text(MESSAGE, "x"));
        assert_eq!(container.current_state(), ShowState::Empty);
    }

    #[test]
    fn show_error_with_string_resolves_resource() {
        let mut container = registered();
        assert_eq!(container.show_error_with_string(MESSAGE, StringId(100)), Ok(true));

        let root = view(&container, SlotKind::Error);
        let message = container.host().find_descendant(&root, MESSAGE).unwrap();
        assert_eq!(container.host().text(message), Some("Try again later"));
    }

    #[test]
    fn missing_string_does_not_transition() {
        let mut container = registered();
        container.show_content();
        assert_eq!(
            container.show_empty_with_string(MESSAGE, StringId(5)),
            Err(ContainerError::StringNotFound(StringId(5)))
        );
        assert_eq!(container.current_state(), ShowState::Content);
    }

    #[test]
    fn history_tracks_effective_transitions() {
        let mut container = registered();
        container.show_loading();
        container.show_loading();
        container.show_content();
        container.show_error();

        assert_eq!(
            container.history().get_path(),
            vec![
                ShowState::Unset,
                ShowState::Loading,
                ShowState::Content,
                ShowState::Error
            ]
        );
    }
}
