//! Undoable units of work.

use std::fmt;

use crate::language::LanguageId;
use crate::property::{Property, PropertyValue};

/// One reversible change.
///
/// Commands write straight into their target. Suspending capture while they
/// run is the caller's job (see [`CommandHistory`](crate::CommandHistory)).
pub trait Command {
    fn undo(&self);
    fn redo(&self);

    /// Short human-readable description, used for logging.
    fn describe(&self) -> String;

    /// Whether replaying this command would touch language `id`.
    fn refers_to(&self, _id: LanguageId) -> bool {
        false
    }
}

/// A change of one property from `old` to `new`.
pub struct ValueChangeCommand<T> {
    property: Property<T>,
    old: T,
    new: T,
    owner: Option<LanguageId>,
}

impl<T: PropertyValue> ValueChangeCommand<T> {
    pub fn new(property: Property<T>, old: T, new: T) -> Self {
        ValueChangeCommand {
            property,
            old,
            new,
            owner: None,
        }
    }

    /// Mark the property as a field of language `id`.
    pub fn owned_by(mut self, id: LanguageId) -> Self {
        self.owner = Some(id);
        self
    }

    pub fn owner(&self) -> Option<LanguageId> {
        self.owner
    }

    pub fn property(&self) -> &Property<T> {
        &self.property
    }

    pub fn old_value(&self) -> &T {
        &self.old
    }

    pub fn new_value(&self) -> &T {
        &self.new
    }
}

impl<T: PropertyValue> Command for ValueChangeCommand<T> {
    fn undo(&self) {
        self.property.set(self.old.clone());
    }

    fn redo(&self) {
        self.property.set(self.new.clone());
    }

    fn describe(&self) -> String {
        format!("{}: {:?} -> {:?}", self.property.name(), self.old, self.new)
    }

    fn refers_to(&self, id: LanguageId) -> bool {
        self.owner == Some(id)
    }
}

impl<T: PropertyValue> fmt::Debug for ValueChangeCommand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueChangeCommand")
            .field("property", &self.property.name())
            .field("old", &self.old)
            .field("new", &self.new)
            .field("owner", &self.owner)
            .finish()
    }
}
