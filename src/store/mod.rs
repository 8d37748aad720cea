//! The language store: ordered records, the current selection, and a
//! filtered view that follows the search text.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::EditorError;
use crate::language::{seed_languages, Language, LanguageId, LanguageSnapshot};
use crate::property::{Detach, Property, Subscription};

struct StoreInner {
    languages: RefCell<Vec<Language>>,
    ids: Property<Vec<LanguageId>>,
    selected_id: Property<Option<LanguageId>>,
    search_text: Property<String>,
    filtered_ids: Property<Vec<LanguageId>>,
    name_watchers: RefCell<Vec<(LanguageId, Subscription<String>)>>,
}

/// Ordered collection of languages. Clones share the same storage.
///
/// Ids are unique and positive; `add` rejects anything else and leaves the
/// store untouched.
#[derive(Clone)]
pub struct LanguageStore {
    inner: Rc<StoreInner>,
}

/// Non-owning handle to a [`LanguageStore`].
#[derive(Clone)]
pub struct WeakLanguageStore {
    inner: Weak<StoreInner>,
}

impl WeakLanguageStore {
    pub fn upgrade(&self) -> Option<LanguageStore> {
        self.inner.upgrade().map(|inner| LanguageStore { inner })
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageStore {
    pub fn new() -> Self {
        let store = LanguageStore {
            inner: Rc::new(StoreInner {
                languages: RefCell::new(Vec::new()),
                ids: Property::with_name("language_ids", Vec::new()),
                selected_id: Property::with_name("selected_language_id", None),
                search_text: Property::with_name("search_text", String::new()),
                filtered_ids: Property::with_name("filtered_language_ids", Vec::new()),
                name_watchers: RefCell::new(Vec::new()),
            }),
        };

        let weak = store.downgrade();
        store.inner.search_text.subscribe(move |_, _| {
            if let Some(store) = weak.upgrade() {
                store.refresh_filter();
            }
        });

        store
    }

    /// A store holding the built-in seed languages.
    pub fn seeded() -> Self {
        let store = LanguageStore::new();
        for snapshot in seed_languages() {
            if let Err(err) = store.add(Language::from_snapshot(&snapshot)) {
                tracing::warn!("skipping seed language {}: {}", snapshot.name, err);
            }
        }
        store
    }

    /// Build a store from snapshots, failing on the first invalid or
    /// duplicate id.
    pub fn from_snapshots(snapshots: &[LanguageSnapshot]) -> Result<Self, EditorError> {
        let store = LanguageStore::new();
        for snapshot in snapshots {
            store.add(Language::from_snapshot(snapshot))?;
        }
        Ok(store)
    }

    pub fn downgrade(&self) -> WeakLanguageStore {
        WeakLanguageStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn all_languages(&self) -> Vec<Language> {
        self.inner.languages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.languages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.languages.borrow().is_empty()
    }

    /// Languages whose name contains `search_text`, ignoring case, in store
    /// order. An empty search text matches everything.
    pub fn filtered_languages(&self, search_text: &str) -> Vec<Language> {
        self.inner
            .languages
            .borrow()
            .iter()
            .filter(|language| language.matches(search_text))
            .cloned()
            .collect()
    }

    /// Languages matching the current search text.
    pub fn visible_languages(&self) -> Vec<Language> {
        let search_text = self.search_text();
        self.filtered_languages(&search_text)
    }

    pub fn find_by_id(&self, id: LanguageId) -> Option<Language> {
        if id <= 0 {
            return None;
        }
        self.inner
            .languages
            .borrow()
            .iter()
            .find(|language| language.id() == id)
            .cloned()
    }

    pub fn contains(&self, id: LanguageId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Largest stored id plus one; `1` for an empty store.
    pub fn next_id(&self) -> LanguageId {
        self.inner
            .languages
            .borrow()
            .iter()
            .map(Language::id)
            .max()
            .map_or(1, |id| id + 1)
    }

    /// Append a language.
    pub fn add(&self, language: Language) -> Result<(), EditorError> {
        let id = language.id();
        if id <= 0 {
            return Err(EditorError::InvalidId(id));
        }
        if self.contains(id) {
            return Err(EditorError::DuplicateId(id));
        }

        let watcher = {
            let store = self.downgrade();
            language.name().observe(move |_, _| {
                if let Some(store) = store.upgrade() {
                    store.refresh_filter();
                }
            })
        };
        self.inner.name_watchers.borrow_mut().push((id, watcher));
        self.inner.languages.borrow_mut().push(language);
        self.refresh();
        Ok(())
    }

    /// Remove a language and return it.
    ///
    /// If it is selected, the selection is cleared first, which unbinds the
    /// working record from it and stops undo capture on it.
    pub fn remove(&self, id: LanguageId) -> Result<Language, EditorError> {
        if !self.contains(id) {
            return Err(EditorError::NotFound(id));
        }

        if self.selected_id() == Some(id) {
            self.clear_selection();
        }

        let removed = {
            let mut languages = self.inner.languages.borrow_mut();
            let index = languages
                .iter()
                .position(|language| language.id() == id)
                .ok_or(EditorError::NotFound(id))?;
            languages.remove(index)
        };

        {
            let mut watchers = self.inner.name_watchers.borrow_mut();
            if let Some(index) = watchers.iter().position(|(watched, _)| *watched == id) {
                let (_, watcher) = watchers.remove(index);
                watcher.detach();
            }
        }

        self.refresh();
        Ok(removed)
    }

    /// Select a language. An unknown id leaves nothing selected.
    pub fn select(&self, id: LanguageId) -> Result<(), EditorError> {
        if self.contains(id) {
            self.inner.selected_id.set(Some(id));
            Ok(())
        } else {
            tracing::debug!("cannot select language {}: not found", id);
            self.inner.selected_id.set(None);
            Err(EditorError::NotFound(id))
        }
    }

    pub fn clear_selection(&self) {
        self.inner.selected_id.set(None);
    }

    pub fn selected_id(&self) -> Option<LanguageId> {
        self.inner.selected_id.get()
    }

    pub fn selected_language(&self) -> Option<Language> {
        self.selected_id().and_then(|id| self.find_by_id(id))
    }

    pub fn selected_id_property(&self) -> &Property<Option<LanguageId>> {
        &self.inner.selected_id
    }

    pub fn search_text(&self) -> String {
        self.inner.search_text.get()
    }

    /// Update the search text; the filtered view follows.
    pub fn set_search_text(&self, text: impl Into<String>) {
        self.inner.search_text.set(text.into());
    }

    pub fn search_text_property(&self) -> &Property<String> {
        &self.inner.search_text
    }

    /// Ids of all languages, in store order.
    pub fn ids(&self) -> &Property<Vec<LanguageId>> {
        &self.inner.ids
    }

    /// Ids of the languages matching the search text, in store order.
    pub fn filtered_ids(&self) -> &Property<Vec<LanguageId>> {
        &self.inner.filtered_ids
    }

    fn refresh(&self) {
        let ids: Vec<LanguageId> = self
            .inner
            .languages
            .borrow()
            .iter()
            .map(Language::id)
            .collect();
        self.inner.ids.set(ids);
        self.refresh_filter();
    }

    /// Recompute the filtered view. Runs on its own whenever the store, the
    /// search text or a language name changes.
    pub fn refresh_filter(&self) {
        let search_text = self.search_text();
        let filtered: Vec<LanguageId> = self
            .filtered_languages(&search_text)
            .iter()
            .map(Language::id)
            .collect();
        self.inner.filtered_ids.set(filtered);
    }
}
