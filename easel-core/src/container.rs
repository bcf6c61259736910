//! The editor container: navigation state, view source, and the three
//! render slots, resolved together.

use crate::context::ViewContext;
use crate::nav::Navigator;
use crate::registry::{ViewRegistry, ViewSource};
use crate::slot::{CommandSlot, StatusSlot};
use crate::view::ViewName;

/// The three surfaces of one update, all resolved against the same context
/// snapshot.
///
/// A missing entry means the slot is unset (command, status) or the active
/// view is not registered (content). Neither case is an error.
pub struct Surfaces<R> {
    pub command: Option<R>,
    pub status: Option<R>,
    pub content: Option<R>,
}

/// Base editor container: view registration plus navigation plumbing for
/// three pluggable render surfaces.
pub struct PanelContainer<R> {
    navigator: Navigator,
    source: ViewSource<R>,
    command: Option<CommandSlot<R>>,
    status: Option<StatusSlot<R>>,
}

impl<R: Clone> PanelContainer<R> {
    /// Creates a container seeded at `initial_view`.
    ///
    /// The seed happens here and exactly once: replacing the view source
    /// later, or re-resolving it on every update, never moves the container
    /// back to its initial view.
    pub fn new(initial_view: impl Into<ViewName>, source: ViewSource<R>) -> Self {
        Self {
            navigator: Navigator::new(initial_view),
            source,
            command: None,
            status: None,
        }
    }

    /// Installs the command surface.
    pub fn with_command_slot(mut self, slot: CommandSlot<R>) -> Self {
        self.command = Some(slot);
        self
    }

    /// Installs the status surface.
    pub fn with_status_slot(mut self, slot: StatusSlot<R>) -> Self {
        self.status = Some(slot);
        self
    }

    /// Installs the view-change callback.
    pub fn with_on_view_change(self, f: impl FnMut(&str) + 'static) -> Self {
        self.navigator.set_on_view_change(f);
        self
    }

    /// A handle onto this container's navigation state.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// See [`Navigator::navigate`].
    pub fn navigate(&self, name: impl Into<ViewName>) {
        self.navigator.navigate(name);
    }

    /// See [`Navigator::go_back`].
    pub fn go_back(&self) -> bool {
        self.navigator.go_back()
    }

    /// Replaces the view source. Navigation state is untouched: the current
    /// view and history survive even if the new source no longer registers
    /// them.
    pub fn set_views(&mut self, source: ViewSource<R>) {
        self.source = source;
    }

    /// Resolves the current view source into a registry snapshot.
    pub fn registry(&self) -> ViewRegistry<R> {
        ViewRegistry::resolve(&self.source, &self.navigator)
    }

    /// Captures a context snapshot against a fresh registry resolution.
    pub fn context(&self) -> ViewContext {
        ViewContext::capture(&self.navigator, &self.registry())
    }

    /// Resolves all three surfaces for this update.
    ///
    /// The registry is re-resolved first, then one context is captured, and
    /// every slot sees that context: even a dynamic slot that navigates
    /// while resolving cannot make the surfaces of this update disagree
    /// about the current view.
    pub fn surfaces(&self) -> Surfaces<R> {
        let registry = self.registry();
        let ctx = ViewContext::capture(&self.navigator, &registry);
        let command = self.command.as_ref().map(|slot| slot.resolve(&ctx));
        let status = self
            .status
            .as_ref()
            .map(|slot| slot.resolve(ctx.current_view()));
        let content = registry
            .lookup(ctx.current_view())
            .map(|view| view.content.clone());
        Surfaces {
            command,
            status,
            content,
        }
    }
}
