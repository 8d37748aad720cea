use std::rc::Rc;

use crate::command::Command;
use crate::history::CommandHistory;
use crate::language::LanguageId;
use crate::property::Subscription;
use crate::store::{LanguageStore, WeakLanguageStore};

/// A change of the selected language.
///
/// Replays go through [`LanguageStore::select`], so an id that has left the
/// store resolves to no selection.
pub(crate) struct SelectionCommand {
    store: WeakLanguageStore,
    old: Option<LanguageId>,
    new: Option<LanguageId>,
}

impl SelectionCommand {
    pub(crate) fn new(
        store: WeakLanguageStore,
        old: Option<LanguageId>,
        new: Option<LanguageId>,
    ) -> Self {
        SelectionCommand { store, old, new }
    }

    fn apply(&self, id: Option<LanguageId>) {
        let Some(store) = self.store.upgrade() else {
            return;
        };
        match id {
            Some(id) => {
                if let Err(err) = store.select(id) {
                    tracing::debug!("selection replay resolved to none: {}", err);
                }
            }
            None => store.clear_selection(),
        }
    }
}

impl Command for SelectionCommand {
    fn undo(&self) {
        self.apply(self.old);
    }

    fn redo(&self) {
        self.apply(self.new);
    }

    fn describe(&self) -> String {
        format!("selected_language_id: {:?} -> {:?}", self.old, self.new)
    }

    fn refers_to(&self, id: LanguageId) -> bool {
        self.old == Some(id) || self.new == Some(id)
    }
}

/// Record every selection change of `store` in `history`.
pub(crate) fn track_selection(
    store: &LanguageStore,
    history: &CommandHistory,
) -> Subscription<Option<LanguageId>> {
    let store_ref = store.downgrade();
    let history_ref = history.downgrade();
    store.selected_id_property().observe(move |old, new| {
        if let Some(history) = history_ref.upgrade() {
            history.push(Rc::new(SelectionCommand::new(store_ref.clone(), *old, *new)));
        }
    })
}
