//! The language editor - the presentation model a UI shell talks to.
//!
//! It owns the store, the command history and the proxy binder, and wires
//! them together: a change of the selected id rebinds the working record,
//! edits made through the working record land in the selected language and
//! are captured for undo.
//!
//! ## Example
//!
//! ```
//! use language_editor::LanguageEditor;
//!
//! let editor = LanguageEditor::new();
//! editor.select(1).unwrap();
//!
//! editor.working().name().set("PHP8".to_string());
//! assert!(editor.can_undo());
//!
//! editor.undo();
//! assert_eq!(editor.working().name().get(), "PHP");
//! ```

mod selection;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::history::CommandHistory;
use crate::language::{Language, LanguageId};
use crate::property::{Detach, Property, Subscription};
use crate::proxy::ProxyBinder;
use crate::publisher::{SaveEvent, SavePublisher};
use crate::store::{LanguageStore, WeakLanguageStore};

pub struct LanguageEditor {
    config: EditorConfig,
    title: Property<String>,
    store: LanguageStore,
    history: CommandHistory,
    binder: Rc<RefCell<ProxyBinder>>,
    working: Language,
    saves: Cell<u64>,
    selection_listener: Subscription<Option<LanguageId>>,
    removal_listener: Subscription<Vec<LanguageId>>,
    selection_capture: Option<Subscription<Option<LanguageId>>>,
}

impl Default for LanguageEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageEditor {
    /// An editor over the built-in seed languages with default settings.
    pub fn new() -> Self {
        Self::build(EditorConfig::default(), LanguageStore::seeded())
    }

    /// An editor configured by `config`. Fails if the seed contains an
    /// invalid or duplicate id.
    pub fn from_config(config: EditorConfig) -> Result<Self, EditorError> {
        let store = LanguageStore::from_snapshots(&config.seed)?;
        Ok(Self::build(config, store))
    }

    fn build(config: EditorConfig, store: LanguageStore) -> Self {
        let history = match config.history_limit {
            Some(limit) => CommandHistory::new().with_limit(limit),
            None => CommandHistory::new(),
        };

        let binder = ProxyBinder::new(history.clone())
            .with_reset_on_deselect(config.reset_working_on_deselect);
        let working = binder.working().clone();
        let binder = Rc::new(RefCell::new(binder));

        let selection_listener = {
            let store_ref = store.downgrade();
            let binder_ref = Rc::downgrade(&binder);
            store
                .selected_id_property()
                .observe(move |old, new| rebind(&store_ref, &binder_ref, *old, *new))
        };

        let removal_listener = {
            let history_ref = history.downgrade();
            store.ids().observe(move |old, new| {
                let Some(history) = history_ref.upgrade() else {
                    return;
                };
                for id in old.iter().filter(|id| !new.contains(*id)) {
                    history.forget(*id);
                }
            })
        };

        if let Some(id) = config.initial_selection {
            if let Err(err) = store.select(id) {
                tracing::debug!("initial selection skipped: {}", err);
            }
        }

        // Selection tracking starts after the initial selection so that it
        // is not undoable.
        let selection_capture = config
            .undoable_selection
            .then(|| selection::track_selection(&store, &history));

        LanguageEditor {
            title: Property::with_name("title", config.title.clone()),
            config,
            store,
            history,
            binder,
            working,
            saves: Cell::new(0),
            selection_listener,
            removal_listener,
            selection_capture,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn title(&self) -> &Property<String> {
        &self.title
    }

    pub fn store(&self) -> &LanguageStore {
        &self.store
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// The working record bound to the selected language.
    pub fn working(&self) -> &Language {
        &self.working
    }

    /// Id of the language the working record is currently bound to.
    pub fn bound_id(&self) -> Option<LanguageId> {
        self.binder
            .try_borrow()
            .ok()
            .and_then(|binder| binder.bound_id())
    }

    pub fn languages(&self) -> Vec<Language> {
        self.store.all_languages()
    }

    /// Languages matching the current search text.
    pub fn filtered_languages(&self) -> Vec<Language> {
        self.store.visible_languages()
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.store.set_search_text(text);
    }

    pub fn selected_id(&self) -> Option<LanguageId> {
        self.store.selected_id()
    }

    pub fn selected_id_property(&self) -> &Property<Option<LanguageId>> {
        self.store.selected_id_property()
    }

    pub fn selected_language(&self) -> Option<Language> {
        self.store.selected_language()
    }

    /// Select a language and bind the working record to it.
    ///
    /// An unknown id leaves nothing selected and reports `NotFound`.
    pub fn select(&self, id: LanguageId) -> Result<(), EditorError> {
        self.store.select(id)
    }

    pub fn clear_selection(&self) {
        self.store.clear_selection();
    }

    /// Publish the selected language's current values.
    ///
    /// Returns the published event, or `None` when nothing is selected. A
    /// failed publish does not consume a sequence number.
    pub fn save<P: SavePublisher>(
        &self,
        publisher: &mut P,
    ) -> Result<Option<SaveEvent>, EditorError> {
        let Some(language) = self.selected_language() else {
            return Ok(None);
        };

        let event = SaveEvent::new(self.saves.get() + 1, language.snapshot());
        publisher
            .publish(&event)
            .map_err(|err| EditorError::Publish(err.to_string()))?;
        self.saves.set(event.sequence);

        tracing::info!(
            "saved language {} ({})",
            event.language_id(),
            event.language.name
        );
        Ok(Some(event))
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> u64 {
        self.saves.get()
    }

    /// Append a language with a fresh id and empty fields, and select it.
    pub fn add_new(&self) -> Result<LanguageId, EditorError> {
        let id = self.store.next_id();
        self.store.add(Language::new(id))?;
        self.store.select(id)?;
        tracing::debug!("added language {}", id);
        Ok(id)
    }

    /// Remove the selected language. Returns `None` when nothing is selected.
    pub fn remove(&self) -> Result<Option<Language>, EditorError> {
        match self.selected_id() {
            Some(id) => self.remove_language(id).map(Some),
            None => Ok(None),
        }
    }

    /// Remove any language by id, clearing the selection if it was selected.
    ///
    /// Undo and redo entries that refer to the removed language are dropped.
    pub fn remove_language(&self, id: LanguageId) -> Result<Language, EditorError> {
        let removed = self.store.remove(id)?;
        tracing::debug!("removed language {}", id);
        Ok(removed)
    }

    pub fn undo(&self) -> bool {
        self.history.undo()
    }

    pub fn redo(&self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn can_undo_property(&self) -> &Property<bool> {
        self.history.can_undo_property()
    }

    pub fn can_redo_property(&self) -> &Property<bool> {
        self.history.can_redo_property()
    }
}

impl Drop for LanguageEditor {
    fn drop(&mut self) {
        self.selection_listener.detach();
        self.removal_listener.detach();
        if let Some(capture) = &self.selection_capture {
            capture.detach();
        }
    }
}

fn rebind(
    store: &WeakLanguageStore,
    binder: &Weak<RefCell<ProxyBinder>>,
    old: Option<LanguageId>,
    new: Option<LanguageId>,
) {
    let (Some(store), Some(binder)) = (store.upgrade(), binder.upgrade()) else {
        return;
    };

    let next = new.and_then(|id| store.find_by_id(id));
    tracing::debug!("selection changed from {:?} to {:?}", old, new);

    match binder.try_borrow_mut() {
        Ok(mut binder) => binder.bind(next.as_ref()),
        Err(_) => tracing::warn!(
            "selection changed to {:?} while the working record was being rebound; ignored",
            new
        ),
    };
}
