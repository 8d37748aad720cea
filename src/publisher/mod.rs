//! Save publishing - where `save()` hands the selected language's values.
//!
//! A save produces a [`SaveEvent`]: the language's snapshot plus its position
//! in the session. Publishers receive the typed event; serializing it is up
//! to the sink.

use std::convert::Infallible;
use std::fmt;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::language::{LanguageId, LanguageSnapshot};

/// Event name under which saves are emitted.
pub const LANGUAGE_SAVED: &str = "LanguageSaved";

/// One saved language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEvent {
    /// Counts the saves of one editor, starting at 1.
    pub sequence: u64,
    pub language: LanguageSnapshot,
}

impl SaveEvent {
    pub fn new(sequence: u64, language: LanguageSnapshot) -> Self {
        SaveEvent { sequence, language }
    }

    pub fn language_id(&self) -> LanguageId {
        self.language.id
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Destination of saved languages.
pub trait SavePublisher {
    type Error: fmt::Display;

    fn publish(&mut self, event: &SaveEvent) -> Result<(), Self::Error>;
}

/// Keeps every save in memory, in the order they happened.
#[derive(Debug, Default)]
pub struct SaveLog {
    events: Vec<SaveEvent>,
}

impl SaveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SaveEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The values most recently saved for language `id`.
    pub fn last_saved(&self, id: LanguageId) -> Option<&LanguageSnapshot> {
        self.events
            .iter()
            .rev()
            .map(|event| &event.language)
            .find(|language| language.id == id)
    }

    /// Whether `language` differs from what was last saved for its id.
    /// A language that was never saved counts as unsaved.
    pub fn is_unsaved(&self, language: &LanguageSnapshot) -> bool {
        self.last_saved(language.id) != Some(language)
    }
}

impl SavePublisher for SaveLog {
    type Error = Infallible;

    fn publish(&mut self, event: &SaveEvent) -> Result<(), Self::Error> {
        tracing::info!(
            "save #{}: language {} ({})",
            event.sequence,
            event.language_id(),
            event.language.name
        );
        self.events.push(event.clone());
        Ok(())
    }
}

#[cfg(feature = "emitter")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterPublisherError {
    /// A save listener panicked; carries the number of failed listeners.
    ListenerPanicked(usize),
}

#[cfg(feature = "emitter")]
impl fmt::Display for EmitterPublisherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitterPublisherError::ListenerPanicked(count) => {
                write!(f, "{} save listener(s) panicked", count)
            }
        }
    }
}

#[cfg(feature = "emitter")]
impl std::error::Error for EmitterPublisherError {}

/// Emits each [`SaveEvent`] under [`LANGUAGE_SAVED`] to in-process listeners.
///
/// The emitter runs every listener on its own thread; `publish` waits for
/// all of them, so a save has been delivered once it returns.
#[cfg(feature = "emitter")]
pub struct EmitterPublisher {
    emitter: EventEmitter,
}

#[cfg(feature = "emitter")]
impl EmitterPublisher {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterPublisher { emitter }
    }

    /// Register a save listener. Returns its id for later removal.
    pub fn on_save<F>(&mut self, listener: F) -> String
    where
        F: Fn(SaveEvent) + Send + Sync + 'static,
    {
        self.emitter.on(LANGUAGE_SAVED, listener)
    }

    /// Remove a save listener. Returns `false` if the id is unknown.
    pub fn remove_listener(&mut self, id: &str) -> bool {
        self.emitter.remove_listener(id).is_some()
    }
}

#[cfg(feature = "emitter")]
impl SavePublisher for EmitterPublisher {
    type Error = EmitterPublisherError;

    fn publish(&mut self, event: &SaveEvent) -> Result<(), Self::Error> {
        let failed = self
            .emitter
            .emit(LANGUAGE_SAVED, event.clone())
            .into_iter()
            .map(|handle| handle.join())
            .filter(Result::is_err)
            .count();

        if failed > 0 {
            tracing::warn!("{} listener(s) failed for save #{}", failed, event.sequence);
            return Err(EmitterPublisherError::ListenerPanicked(failed));
        }
        Ok(())
    }
}
