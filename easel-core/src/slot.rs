//! Pluggable render slots.

use crate::context::ViewContext;

/// One render slot: a fixed renderable, or a function of the slot's
/// argument. The container resolves both variants uniformly, so call sites
/// never inspect which one they were given.
pub enum Slot<A: ?Sized, R> {
    Static(R),
    Dynamic(Box<dyn Fn(&A) -> R>),
}

impl<A: ?Sized, R> Slot<A, R> {
    /// A slot that always renders the same value.
    pub fn fixed(renderable: R) -> Self {
        Self::Static(renderable)
    }

    /// A slot recomputed from its argument on every update.
    pub fn dynamic(f: impl Fn(&A) -> R + 'static) -> Self {
        Self::Dynamic(Box::new(f))
    }
}

impl<A: ?Sized, R: Clone> Slot<A, R> {
    /// Produces the slot's renderable for this update.
    pub fn resolve(&self, arg: &A) -> R {
        match self {
            Self::Static(renderable) => renderable.clone(),
            Self::Dynamic(f) => f(arg),
        }
    }
}

/// Command surface: sees the full context, navigation operations and
/// detail-view flag included.
pub type CommandSlot<R> = Slot<ViewContext, R>;

/// Status surface: sees the current view name alone. It has no business
/// navigating, so its contract is deliberately narrower.
pub type StatusSlot<R> = Slot<str, R>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_slot_resolves_to_its_value() {
        let slot: StatusSlot<String> = Slot::fixed("banner".to_string());
        assert_eq!(slot.resolve("library"), "banner");
        assert_eq!(slot.resolve("record-1"), "banner");
    }

    #[test]
    fn dynamic_slot_sees_its_argument() {
        let slot: StatusSlot<String> = Slot::dynamic(|name: &str| format!("at {name}"));
        assert_eq!(slot.resolve("library"), "at library");
        assert_eq!(slot.resolve("record-1"), "at record-1");
    }
}
