use super::{ListenerId, PropertyValue, WeakProperty};

/// Anything that holds listeners and can release them again.
pub trait Detach {
    /// Remove the hookup. Detaching twice is harmless.
    fn detach(&self);
}

/// A listener registered on a property, removable without knowing `T`.
pub struct Subscription<T> {
    property: WeakProperty<T>,
    id: ListenerId,
}

impl<T> Subscription<T> {
    pub(crate) fn new(property: WeakProperty<T>, id: ListenerId) -> Self {
        Subscription { property, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<T: PropertyValue> Subscription<T> {
    /// Whether the listener is still registered on a live property.
    pub fn is_attached(&self) -> bool {
        self.property
            .upgrade()
            .map(|property| property.inner.listeners.borrow().iter().any(|l| l.id == self.id))
            .unwrap_or(false)
    }
}

impl<T: PropertyValue> Detach for Subscription<T> {
    fn detach(&self) {
        if let Some(property) = self.property.upgrade() {
            property.unsubscribe(self.id);
        }
    }
}
