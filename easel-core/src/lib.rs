//! View registration and navigation state for embeddable editor containers.
//!
//! This crate is the core of easel: a [`PanelContainer`] tracks which named
//! view is active, keeps a navigable history stack, derives detail-view
//! status, and hands one consistent [`ViewContext`] to three pluggable
//! render slots (command, status, content). It is generic over the
//! renderable type and carries no terminal dependencies; see `easel-tui`
//! for the ratatui binding.

mod container;
mod context;
mod nav;
mod registry;
mod slot;
mod view;

pub use container::{PanelContainer, Surfaces};
pub use context::ViewContext;
pub use nav::{NavigationState, Navigator, ViewChangeFn};
pub use registry::{ViewRegistry, ViewSource};
pub use slot::{CommandSlot, Slot, StatusSlot};
pub use view::{View, ViewName};
