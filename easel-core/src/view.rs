//! View records for the registry.

/// Name identifying a view within one registry snapshot.
pub type ViewName = String;

/// A named renderable unit, optionally flagged as a detail view.
///
/// `content` is owned by the caller and never inspected by the container;
/// it only travels from registration to the content surface.
#[derive(Debug, Clone)]
pub struct View<R> {
    pub name: ViewName,
    pub content: R,
    pub detail: bool,
}

impl<R> View<R> {
    /// Creates a top-level view.
    pub fn new(name: impl Into<ViewName>, content: R) -> Self {
        Self {
            name: name.into(),
            content,
            detail: false,
        }
    }

    /// Creates a detail view.
    ///
    /// The detail flag is what the command surface reads to show its back
    /// affordance; the container itself treats detail views like any other.
    pub fn detail(name: impl Into<ViewName>, content: R) -> Self {
        Self {
            name: name.into(),
            content,
            detail: true,
        }
    }
}
