//! The immutable navigation context handed to render slots.

use crate::nav::Navigator;
use crate::registry::ViewRegistry;
use crate::view::ViewName;

/// Snapshot of the navigation state plus the operations a render slot may
/// invoke.
///
/// `current_view`, `history`, and `is_detail_view` are frozen at capture
/// time; `navigate` and `go_back` act on the live state. Consumers must
/// re-capture after every transition instead of caching a context across
/// transitions.
#[derive(Debug, Clone)]
pub struct ViewContext {
    current: ViewName,
    history: Vec<ViewName>,
    detail: bool,
    navigator: Navigator,
}

impl ViewContext {
    /// Builds one fully consistent snapshot from the navigator and a
    /// registry resolution.
    pub fn capture<R>(navigator: &Navigator, registry: &ViewRegistry<R>) -> Self {
        let state = navigator.snapshot();
        Self {
            detail: registry.is_detail(state.current()),
            current: state.current().to_string(),
            history: state.history().to_vec(),
            navigator: navigator.clone(),
        }
    }

    /// The view that was active when this snapshot was captured.
    pub fn current_view(&self) -> &str {
        &self.current
    }

    /// The visited-view stack at capture time, oldest first.
    pub fn history(&self) -> &[ViewName] {
        &self.history
    }

    /// Whether the captured view was registered as a detail view.
    pub fn is_detail_view(&self) -> bool {
        self.detail
    }

    /// Whether `go_back` would have changed state at capture time.
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// See [`Navigator::navigate`].
    pub fn navigate(&self, name: impl Into<ViewName>) {
        self.navigator.navigate(name);
    }

    /// See [`Navigator::go_back`].
    pub fn go_back(&self) -> bool {
        self.navigator.go_back()
    }
}
