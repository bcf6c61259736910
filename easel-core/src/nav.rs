//! Navigation state and the shared navigator handle.
//!
//! The state machine here is deliberately small: two operations, one stack,
//! one invariant. `navigate` pushes, `go_back` pops, and the current view
//! is always the top of the history stack.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::view::ViewName;

/// Callback invoked after every state-changing transition.
pub type ViewChangeFn = Box<dyn FnMut(&str)>;

/// The mutable navigation state: the active view plus the ordered record of
/// visited views.
///
/// `current` is always the last element of `history`. The stack is seeded
/// with the initial view and only ever changes by one entry at a time, so
/// repeated names are legal and expected when a view is revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: ViewName,
    history: Vec<ViewName>,
}

impl NavigationState {
    fn seed(initial: ViewName) -> Self {
        Self {
            current: initial.clone(),
            history: vec![initial],
        }
    }

    /// The active view name.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The visited-view stack, oldest first. The active view is the last
    /// element.
    pub fn history(&self) -> &[ViewName] {
        &self.history
    }

    /// Stack depth. At depth 1 back navigation is a no-op.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

/// Cloneable handle onto one container's navigation state.
///
/// All clones share the same state. The handle is what view factories and
/// render slots capture so view content can trigger transitions from within
/// itself. Single-threaded on purpose: the contract has exactly one logical
/// writer per update turn, so shared ownership is `Rc`, not `Arc`.
#[derive(Clone)]
pub struct Navigator {
    state: Rc<RefCell<NavigationState>>,
    on_change: Rc<RefCell<Option<ViewChangeFn>>>,
}

impl Navigator {
    /// Seeds the state at `initial`. Seeding happens here and never again:
    /// nothing re-seeds an existing navigator, no matter how often the view
    /// source around it is re-resolved.
    pub fn new(initial: impl Into<ViewName>) -> Self {
        Self {
            state: Rc::new(RefCell::new(NavigationState::seed(initial.into()))),
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    /// Installs the view-change callback, replacing any previous one.
    pub fn set_on_view_change(&self, f: impl FnMut(&str) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(f));
    }

    /// The active view name.
    pub fn current(&self) -> ViewName {
        self.state.borrow().current.clone()
    }

    /// Read-only copy of the visited-view stack, oldest first.
    pub fn history(&self) -> Vec<ViewName> {
        self.state.borrow().history.clone()
    }

    /// Stack depth. At depth 1, `go_back` is a no-op.
    pub fn depth(&self) -> usize {
        self.state.borrow().history.len()
    }

    /// Pushes `name` onto the history and makes it current.
    ///
    /// Unregistered names are accepted; their content surface resolves to
    /// nothing rather than failing the host. Fires the view-change callback
    /// exactly once.
    pub fn navigate(&self, name: impl Into<ViewName>) {
        let name = name.into();
        {
            let mut state = self.state.borrow_mut();
            tracing::debug!(from = %state.current, to = %name, "navigate");
            state.history.push(name.clone());
            state.current = name.clone();
        }
        self.notify(&name);
    }

    /// Pops one entry and returns to the previous view.
    ///
    /// At depth 1 this is a no-op: no state change, no callback, returns
    /// `false`. Otherwise fires the callback with the restored view name and
    /// returns `true`.
    pub fn go_back(&self) -> bool {
        let target = {
            let mut state = self.state.borrow_mut();
            if state.history.len() <= 1 {
                tracing::debug!(at = %state.current, "go_back at root ignored");
                return false;
            }
            state.history.pop();
            // depth was at least 2, so the stack is still non-empty
            let top = state.history[state.history.len() - 1].clone();
            tracing::debug!(from = %state.current, to = %top, "go_back");
            state.current = top.clone();
            top
        };
        self.notify(&target);
        true
    }

    /// Read-only copy of the full state.
    pub fn snapshot(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Runs the callback with the state borrow released, so the callback may
    /// itself navigate. A transition made from inside the callback applies
    /// normally but does not re-enter the callback.
    fn notify(&self, name: &str) {
        let taken = self.on_change.borrow_mut().take();
        if let Some(mut cb) = taken {
            cb(name);
            let mut slot = self.on_change.borrow_mut();
            // the callback may have installed a replacement; keep it
            if slot.is_none() {
                *slot = Some(cb);
            }
        }
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(nav: &Navigator) -> Rc<RefCell<Vec<String>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = calls.clone();
        nav.set_on_view_change(move |name| seen.borrow_mut().push(name.to_string()));
        calls
    }

    #[test]
    fn new_seeds_history_with_initial_view() {
        let nav = Navigator::new("empty");
        assert_eq!(nav.current(), "empty");
        assert_eq!(nav.history(), vec!["empty"]);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn navigate_pushes_and_sets_current() {
        let nav = Navigator::new("empty");
        nav.navigate("main");

        assert_eq!(nav.current(), "main");
        assert_eq!(nav.history(), vec!["empty", "main"]);
    }

    #[test]
    fn navigate_allows_revisiting_views() {
        let nav = Navigator::new("main");
        nav.navigate("detail-1");
        nav.navigate("main");

        assert_eq!(nav.history(), vec!["main", "detail-1", "main"]);
    }

    #[test]
    fn history_length_tracks_navigate_count() {
        let nav = Navigator::new("root");
        for i in 0..5 {
            nav.navigate(format!("view-{i}"));
        }
        assert_eq!(nav.depth(), 6);
    }

    #[test]
    fn go_back_pops_to_previous_view() {
        let nav = Navigator::new("empty");
        nav.navigate("main");
        nav.navigate("detail-1");

        assert!(nav.go_back());
        assert_eq!(nav.current(), "main");
        assert_eq!(nav.history(), vec!["empty", "main"]);
    }

    #[test]
    fn go_back_at_root_is_noop() {
        let nav = Navigator::new("empty");

        assert!(!nav.go_back());
        assert_eq!(nav.current(), "empty");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn go_back_at_root_is_idempotent() {
        let nav = Navigator::new("empty");
        let calls = recorded(&nav);

        assert!(!nav.go_back());
        assert!(!nav.go_back());

        assert_eq!(nav.history(), vec!["empty"]);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn navigate_then_go_back_round_trips() {
        let nav = Navigator::new("empty");
        nav.navigate("main");
        let before = nav.current();

        nav.navigate("detail-1");
        nav.go_back();

        assert_eq!(nav.current(), before);
    }

    #[test]
    fn callback_fires_once_per_navigate_with_new_name() {
        let nav = Navigator::new("empty");
        let calls = recorded(&nav);

        nav.navigate("main");
        nav.navigate("detail-1");

        assert_eq!(*calls.borrow(), vec!["main", "detail-1"]);
    }

    #[test]
    fn callback_fires_on_successful_go_back_with_restored_name() {
        let nav = Navigator::new("empty");
        nav.navigate("main");
        let calls = recorded(&nav);

        nav.go_back();

        assert_eq!(*calls.borrow(), vec!["empty"]);
    }

    #[test]
    fn set_on_view_change_replaces_previous_callback() {
        let nav = Navigator::new("empty");
        let first = recorded(&nav);
        let second = recorded(&nav);

        nav.navigate("main");

        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec!["main"]);
    }

    #[test]
    fn clones_share_state() {
        let nav = Navigator::new("empty");
        let handle = nav.clone();

        handle.navigate("main");

        assert_eq!(nav.current(), "main");
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn transition_inside_callback_applies_without_reentering() {
        let nav = Navigator::new("home");
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = calls.clone();
        let inner = nav.clone();
        nav.set_on_view_change(move |name| {
            seen.borrow_mut().push(name.to_string());
            if name == "detail" {
                inner.navigate("aftermath");
            }
        });

        nav.navigate("detail");

        assert_eq!(nav.current(), "aftermath");
        assert_eq!(nav.history(), vec!["home", "detail", "aftermath"]);
        assert_eq!(*calls.borrow(), vec!["detail"]);
    }

    #[test]
    fn current_is_always_the_top_of_history() {
        let nav = Navigator::new("empty");
        for target in ["main", "detail-1", "main"] {
            nav.navigate(target);
            let state = nav.snapshot();
            assert_eq!(Some(state.current()), state.history().last().map(|s| s.as_str()));
        }
        while nav.go_back() {
            let state = nav.snapshot();
            assert_eq!(Some(state.current()), state.history().last().map(|s| s.as_str()));
        }
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn callback_survives_its_own_invocation() {
        let nav = Navigator::new("home");
        let calls = recorded(&nav);

        nav.navigate("a");
        nav.navigate("b");
        nav.go_back();

        assert_eq!(calls.borrow().len(), 3);
    }
}
