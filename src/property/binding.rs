use std::cell::Cell;
use std::rc::Rc;

use super::{Detach, FlagGuard, Property, PropertyValue, Subscription, WeakProperty};

/// A two-way link between two properties of the same type.
///
/// Built from two one-directional subscriptions sharing a guard flag: while
/// one side is being mirrored into the other, the opposite mirror is
/// suspended, so a write never bounces back.
pub struct Binding<T> {
    target: Subscription<T>,
    source: Subscription<T>,
}

/// Bind `target` and `source` in both directions.
///
/// `target` takes the current value of `source` immediately. From then on a
/// write to either side is copied to the other before the write returns.
pub fn bind_bidirectional<T: PropertyValue>(
    target: &Property<T>,
    source: &Property<T>,
) -> Binding<T> {
    target.set(source.get());

    let updating = Rc::new(Cell::new(false));

    let target_subscription = {
        let other = source.downgrade();
        let updating = Rc::clone(&updating);
        target.observe(move |_, new| mirror(&updating, &other, new))
    };

    let source_subscription = {
        let other = target.downgrade();
        let updating = Rc::clone(&updating);
        source.observe(move |_, new| mirror(&updating, &other, new))
    };

    Binding {
        target: target_subscription,
        source: source_subscription,
    }
}

fn mirror<T: PropertyValue>(updating: &Cell<bool>, other: &WeakProperty<T>, value: &T) {
    if updating.get() {
        return;
    }
    let Some(other) = other.upgrade() else {
        return;
    };

    let _guard = FlagGuard::new(updating);
    other.set(value.clone());
}

impl<T: PropertyValue> Binding<T> {
    /// Detach both directions. Each side keeps its last value.
    pub fn unbind(&self) {
        self.target.detach();
        self.source.detach();
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_attached() && self.source.is_attached()
    }
}

impl<T: PropertyValue> Detach for Binding<T> {
    fn detach(&self) {
        self.unbind();
    }
}
