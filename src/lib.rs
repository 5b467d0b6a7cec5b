//! Statepane: a four-state view container driven by a pure state machine.
//!
//! A `StateContainer` shows exactly one of four mutually exclusive slots
//! (loading, content, empty, error) inside a host screen. The UI toolkit is
//! abstracted behind the [`Host`] trait; the container only decides which
//! slot is visible and when registered callbacks fire.
//!
//! # Core Concepts
//!
//! - **Slots**: lazily inflated views, at most one per [`SlotKind`]
//! - **ShowState**: the current state, `Unset` until the first transition
//! - **Ready detection**: a one-shot callback once content has a real size
//! - **History**: bounded record of effective transitions
//!
//! # Example
//!
//! ```rust
//! use statepane::host::{HeadlessHost, ResourceId, Template};
//! use statepane::{ContainerBuilder, ShowState, SlotKind};
//!
//! let mut host = HeadlessHost::new();
//! host.define_layout(ResourceId(10), Template::group());
//! host.define_layout(ResourceId(11), Template::group());
//!
//! let mut container = ContainerBuilder::new()
//!     .loading(ResourceId(10))
//!     .content(ResourceId(11))
//!     .initial(SlotKind::Loading)
//!     .build(host)
//!     .unwrap();
//!
//! assert_eq!(container.current_state(), ShowState::Loading);
//! container.show_content();
//! assert_eq!(container.visible_slot(), Some(SlotKind::Content));
//! ```

pub mod builder;
pub mod config;
pub mod container;
pub mod core;
pub mod host;

// Re-export commonly used types
pub use builder::{BuildError, ContainerBuilder};
pub use config::ContainerConfig;
pub use container::{ContainerError, Registration, StateContainer};
pub use crate::core::{ShowState, SlotKind, StateHistory, StateTransition};
pub use host::Host;
