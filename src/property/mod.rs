//! Observable properties - single-threaded value cells that notify
//! subscribers synchronously whenever their value changes.
//!
//! ## Example
//!
//! ```
//! use language_editor::Property;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let name = Property::with_name("name", String::from("PHP"));
//! let changes = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&changes);
//! name.subscribe(move |_old, _new| counter.set(counter.get() + 1));
//!
//! name.set("PHP8".to_string());
//! name.set("PHP8".to_string()); // unchanged, no notification
//! assert_eq!(changes.get(), 1);
//! ```

mod binding;
mod subscription;

pub use binding::{bind_bidirectional, Binding};
pub use subscription::{Detach, Subscription};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Values that can live inside a [`Property`].
pub trait PropertyValue: Clone + PartialEq + fmt::Debug + 'static {}

impl<T> PropertyValue for T where T: Clone + PartialEq + fmt::Debug + 'static {}

/// Handle returned by [`Property::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener<T> {
    id: ListenerId,
    active: Cell<bool>,
    callback: Box<dyn Fn(&T, &T)>,
}

struct Inner<T> {
    name: &'static str,
    value: RefCell<T>,
    listeners: RefCell<Vec<Rc<Listener<T>>>>,
    next_listener: Cell<u64>,
}

/// A shared, observable value cell.
///
/// Cloning a `Property` yields another handle to the same cell.
pub struct Property<T> {
    inner: Rc<Inner<T>>,
}

/// Non-owning handle to a [`Property`], used by listeners so that a
/// subscription never keeps its own cell alive.
pub struct WeakProperty<T> {
    inner: Weak<Inner<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Property {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Clone for WeakProperty<T> {
    fn clone(&self) -> Self {
        WeakProperty {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakProperty<T> {
    pub fn upgrade(&self) -> Option<Property<T>> {
        self.inner.upgrade().map(|inner| Property { inner })
    }
}

impl<T: PropertyValue> Property<T> {
    pub fn new(value: T) -> Self {
        Self::with_name("", value)
    }

    pub fn with_name(name: &'static str, value: T) -> Self {
        Property {
            inner: Rc::new(Inner {
                name,
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(1),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// The property must not be written from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Store a new value and notify every listener with `(old, new)`.
    ///
    /// Writing a value equal to the current one is a no-op. Listeners run
    /// synchronously, in subscription order, before `set` returns.
    pub fn set(&self, value: T) {
        if *self.inner.value.borrow() == value {
            return;
        }

        let old = self.inner.value.replace(value.clone());

        let listeners: Vec<Rc<Listener<T>>> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            if listener.active.get() {
                (listener.callback)(&old, &value);
            }
        }
    }

    /// Register a change listener.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T, &T) + 'static,
    {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push(Rc::new(Listener {
            id,
            active: Cell::new(true),
            callback: Box::new(listener),
        }));
        id
    }

    /// Register a change listener and wrap it in a detachable [`Subscription`].
    pub fn observe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(&T, &T) + 'static,
    {
        let id = self.subscribe(listener);
        Subscription::new(self.downgrade(), id)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    ///
    /// A listener removed while a notification is in flight is not invoked
    /// for the remainder of that notification.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        match listeners.iter().position(|listener| listener.id == id) {
            Some(index) => {
                let listener = listeners.remove(index);
                listener.active.set(false);
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn downgrade(&self) -> WeakProperty<T> {
        WeakProperty {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Property<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: PropertyValue + Default> Default for Property<T> {
    fn default() -> Self {
        Property::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Property");
        debug.field("name", &self.inner.name);
        match self.inner.value.try_borrow() {
            Ok(value) => debug.field("value", &*value),
            Err(_) => debug.field("value", &"<borrowed>"),
        };
        debug
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Sets a flag for as long as the guard lives and restores the previous
/// state on drop, even when unwinding.
pub(crate) struct FlagGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> FlagGuard<'a> {
    pub(crate) fn new(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        FlagGuard { flag, previous }
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}
