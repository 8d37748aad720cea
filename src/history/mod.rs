//! Command history - the undo and redo stacks plus the listeners that
//! capture property changes as commands.
//!
//! Both stacks are ordered most-recent-first. Capturing a new command clears
//! the redo stack; undo and redo move commands between the stacks and write
//! into the target with capture suspended, so a replay is never recorded as
//! a fresh edit.

mod capture;

pub use capture::LanguageCapture;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::command::{Command, ValueChangeCommand};
use crate::language::LanguageId;
use crate::property::{FlagGuard, Property, PropertyValue, Subscription};

#[derive(Default)]
struct Stacks {
    undo: VecDeque<Rc<dyn Command>>,
    redo: VecDeque<Rc<dyn Command>>,
    limit: Option<usize>,
}

struct HistoryInner {
    stacks: RefCell<Stacks>,
    replaying: Cell<bool>,
    can_undo: Property<bool>,
    can_redo: Property<bool>,
}

/// Undo/redo history. Cloning yields another handle to the same stacks.
#[derive(Clone)]
pub struct CommandHistory {
    inner: Rc<HistoryInner>,
}

pub(crate) struct WeakHistory {
    inner: Weak<HistoryInner>,
}

impl WeakHistory {
    pub(crate) fn upgrade(&self) -> Option<CommandHistory> {
        self.inner.upgrade().map(|inner| CommandHistory { inner })
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        CommandHistory {
            inner: Rc::new(HistoryInner {
                stacks: RefCell::new(Stacks::default()),
                replaying: Cell::new(false),
                can_undo: Property::with_name("can_undo", false),
                can_redo: Property::with_name("can_redo", false),
            }),
        }
    }

    /// Keep at most `limit` undo entries; the oldest are dropped first.
    pub fn with_limit(self, limit: usize) -> Self {
        self.inner.stacks.borrow_mut().limit = Some(limit);
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.inner.stacks.borrow().limit
    }

    pub(crate) fn downgrade(&self) -> WeakHistory {
        WeakHistory {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Record a command. Ignored while an undo or redo is replaying.
    ///
    /// Returns whether the command was recorded.
    pub fn push(&self, command: Rc<dyn Command>) -> bool {
        if self.is_replaying() {
            return false;
        }

        tracing::debug!("captured {}", command.describe());
        {
            let mut stacks = self.inner.stacks.borrow_mut();
            stacks.redo.clear();
            stacks.undo.push_front(command);
            if let Some(limit) = stacks.limit {
                stacks.undo.truncate(limit);
            }
        }
        self.refresh();
        true
    }

    /// Record the change of `property` from `old` to `new`.
    pub fn capture<T: PropertyValue>(&self, property: &Property<T>, old: T, new: T) -> bool {
        if self.is_replaying() {
            return false;
        }
        self.push(Rc::new(ValueChangeCommand::new(property.clone(), old, new)))
    }

    /// Attach a listener that captures every change of `property`.
    ///
    /// The listener holds the history and the property weakly; detach the
    /// returned subscription to stop capturing.
    pub fn track<T: PropertyValue>(&self, property: &Property<T>) -> Subscription<T> {
        self.observe_into(property, None)
    }

    /// Like [`track`](Self::track), but the captured commands belong to
    /// language `owner` and are dropped by [`forget`](Self::forget).
    pub fn track_for<T: PropertyValue>(
        &self,
        property: &Property<T>,
        owner: LanguageId,
    ) -> Subscription<T> {
        self.observe_into(property, Some(owner))
    }

    fn observe_into<T: PropertyValue>(
        &self,
        property: &Property<T>,
        owner: Option<LanguageId>,
    ) -> Subscription<T> {
        let history = self.downgrade();
        let target = property.downgrade();
        property.observe(move |old, new| {
            let (Some(history), Some(target)) = (history.upgrade(), target.upgrade()) else {
                return;
            };
            if history.is_replaying() {
                return;
            }
            let command = ValueChangeCommand::new(target, old.clone(), new.clone());
            let command = match owner {
                Some(owner) => command.owned_by(owner),
                None => command,
            };
            history.push(Rc::new(command));
        })
    }

    /// Drop every command on either stack that refers to language `id`.
    ///
    /// Returns the number of commands removed.
    pub fn forget(&self, id: LanguageId) -> usize {
        let removed = {
            let mut stacks = self.inner.stacks.borrow_mut();
            let before = stacks.undo.len() + stacks.redo.len();
            stacks.undo.retain(|command| !command.refers_to(id));
            stacks.redo.retain(|command| !command.refers_to(id));
            before - stacks.undo.len() - stacks.redo.len()
        };

        if removed > 0 {
            tracing::debug!("dropped {} command(s) for language {}", removed, id);
            self.refresh();
        }
        removed
    }

    /// Revert the most recent command. No-op when there is nothing to undo.
    pub fn undo(&self) -> bool {
        let command = {
            let mut stacks = self.inner.stacks.borrow_mut();
            let Some(command) = stacks.undo.pop_front() else {
                return false;
            };
            stacks.redo.push_front(Rc::clone(&command));
            command
        };

        tracing::debug!("undo {}", command.describe());
        self.replay(|| command.undo());
        self.refresh();
        true
    }

    /// Re-apply the most recently undone command. No-op when there is
    /// nothing to redo.
    pub fn redo(&self) -> bool {
        let command = {
            let mut stacks = self.inner.stacks.borrow_mut();
            let Some(command) = stacks.redo.pop_front() else {
                return false;
            };
            stacks.undo.push_front(Rc::clone(&command));
            command
        };

        tracing::debug!("redo {}", command.describe());
        self.replay(|| command.redo());
        self.refresh();
        true
    }

    fn replay(&self, apply: impl FnOnce()) {
        let _guard = FlagGuard::new(&self.inner.replaying);
        apply();
    }

    pub fn is_replaying(&self) -> bool {
        self.inner.replaying.get()
    }

    pub fn can_undo(&self) -> bool {
        !self.inner.stacks.borrow().undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.inner.stacks.borrow().redo.is_empty()
    }

    /// Observable mirror of [`can_undo`](Self::can_undo).
    pub fn can_undo_property(&self) -> &Property<bool> {
        &self.inner.can_undo
    }

    /// Observable mirror of [`can_redo`](Self::can_redo).
    pub fn can_redo_property(&self) -> &Property<bool> {
        &self.inner.can_redo
    }

    pub fn undo_len(&self) -> usize {
        self.inner.stacks.borrow().undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.inner.stacks.borrow().redo.len()
    }

    /// Descriptions of the undo stack, most recent first.
    pub fn undo_descriptions(&self) -> Vec<String> {
        let stacks = self.inner.stacks.borrow();
        stacks.undo.iter().map(|command| command.describe()).collect()
    }

    pub fn clear(&self) {
        {
            let mut stacks = self.inner.stacks.borrow_mut();
            stacks.undo.clear();
            stacks.redo.clear();
        }
        self.refresh();
    }

    fn refresh(&self) {
        let (can_undo, can_redo) = {
            let stacks = self.inner.stacks.borrow();
            (!stacks.undo.is_empty(), !stacks.redo.is_empty())
        };
        self.inner.can_undo.set(can_undo);
        self.inner.can_redo.set(can_redo);
    }
}
