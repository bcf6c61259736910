//! Declarative view registration.

use crate::nav::Navigator;
use crate::view::View;

/// Where a registry snapshot comes from.
///
/// A factory closure receives the container's navigator so the views it
/// produces can close over it and trigger navigation from within their own
/// content.
pub enum ViewSource<R> {
    /// A fixed list of views.
    Fixed(Vec<View<R>>),
    /// A generator run on every resolution.
    Factory(Box<dyn Fn(&Navigator) -> Vec<View<R>>>),
}

impl<R> ViewSource<R> {
    /// Convenience wrapper for [`ViewSource::Factory`].
    pub fn factory(f: impl Fn(&Navigator) -> Vec<View<R>> + 'static) -> Self {
        Self::Factory(Box::new(f))
    }
}

/// Name-indexed lookup table for one resolution of a view source.
///
/// A registry is a snapshot: resolving again after the source's inputs
/// change produces a fresh table and never touches navigation state.
pub struct ViewRegistry<R> {
    views: Vec<View<R>>,
}

impl<R: Clone> ViewRegistry<R> {
    /// Resolves `source` into a fresh snapshot.
    pub fn resolve(source: &ViewSource<R>, navigator: &Navigator) -> Self {
        let views = match source {
            ViewSource::Fixed(views) => views.clone(),
            ViewSource::Factory(f) => f(navigator),
        };
        let registry = Self { views };
        registry.warn_duplicates();
        registry
    }
}

impl<R> ViewRegistry<R> {
    /// A registry with no views; every lookup misses.
    pub fn empty() -> Self {
        Self { views: Vec::new() }
    }

    /// Finds the view registered under `name`.
    ///
    /// When one resolution carries duplicate names, the last registration
    /// wins; earlier ones are shadowed.
    pub fn lookup(&self, name: &str) -> Option<&View<R>> {
        self.views.iter().rev().find(|v| v.name == name)
    }

    /// Whether `name` is registered as a detail view. Unregistered names are
    /// never detail views.
    pub fn is_detail(&self, name: &str) -> bool {
        self.lookup(name).map(|v| v.detail).unwrap_or(false)
    }

    /// Registered names in registration order, shadowed duplicates included.
    pub fn names(&self) -> Vec<&str> {
        self.views.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    fn warn_duplicates(&self) {
        for (i, view) in self.views.iter().enumerate() {
            if self.views[..i].iter().any(|v| v.name == view.name) {
                tracing::warn!(name = %view.name, "duplicate view name, last registration wins");
            }
        }
    }
}

impl<R> Default for ViewRegistry<R> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> ViewSource<&'static str> {
        ViewSource::Fixed(vec![
            View::new("library", "the shelves"),
            View::detail("record-1", "first record"),
        ])
    }

    #[test]
    fn fixed_source_resolves_all_views() {
        let nav = Navigator::new("library");
        let registry = ViewRegistry::resolve(&fixed(), &nav);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["library", "record-1"]);
    }

    #[test]
    fn lookup_finds_registered_view() {
        let nav = Navigator::new("library");
        let registry = ViewRegistry::resolve(&fixed(), &nav);

        let view = registry.lookup("record-1").expect("registered");
        assert_eq!(view.content, "first record");
        assert!(view.detail);
    }

    #[test]
    fn lookup_misses_unregistered_name() {
        let nav = Navigator::new("library");
        let registry = ViewRegistry::resolve(&fixed(), &nav);

        assert!(registry.lookup("record-9").is_none());
    }

    #[test]
    fn duplicate_name_last_registration_wins() {
        let nav = Navigator::new("library");
        let source = ViewSource::Fixed(vec![
            View::new("library", "first"),
            View::new("library", "second"),
        ]);
        let registry = ViewRegistry::resolve(&source, &nav);

        assert_eq!(registry.lookup("library").map(|v| v.content), Some("second"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn is_detail_reads_registered_flag() {
        let nav = Navigator::new("library");
        let registry = ViewRegistry::resolve(&fixed(), &nav);

        assert!(registry.is_detail("record-1"));
        assert!(!registry.is_detail("library"));
    }

    #[test]
    fn is_detail_false_for_unregistered_name() {
        let registry = ViewRegistry::<&str>::empty();
        assert!(!registry.is_detail("anything"));
    }

    #[test]
    fn factory_receives_the_navigator() {
        let nav = Navigator::new("library");
        let source = ViewSource::factory(|nav| {
            // views can embed where the container currently is
            vec![View::new("library", nav.current())]
        });

        let registry = ViewRegistry::resolve(&source, &nav);
        assert_eq!(
            registry.lookup("library").map(|v| v.content.clone()),
            Some("library".to_string())
        );
    }

    #[test]
    fn resolve_leaves_navigation_state_alone() {
        let nav = Navigator::new("library");
        nav.navigate("record-1");
        let before = nav.history();

        let _ = ViewRegistry::resolve(&fixed(), &nav);
        let _ = ViewRegistry::resolve(&fixed(), &nav);

        assert_eq!(nav.history(), before);
    }

    #[test]
    fn empty_registry_has_no_views() {
        let registry = ViewRegistry::<String>::empty();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }
}
