//! Master-detail editing core for a list of programming languages.
//!
//! A [`LanguageStore`] holds the records, a [`ProxyBinder`] keeps one working
//! record bidirectionally bound to the selected language, and a
//! [`CommandHistory`] captures every field edit of the selected language so
//! it can be undone and redone. [`LanguageEditor`] wires the three together
//! for a UI shell.

mod command;
mod config;
mod editor;
mod error;
mod history;
mod language;
mod property;
mod proxy;
mod publisher;
mod store;

pub use command::{Command, ValueChangeCommand};
pub use config::{EditorConfig, DEFAULT_TITLE};
pub use editor::LanguageEditor;
pub use error::EditorError;
pub use history::{CommandHistory, LanguageCapture};
pub use language::{
    seed_languages, Field, FieldPairVisitor, FieldValue, FieldVisitor, Language, LanguageId,
    LanguageSnapshot, NO_SELECTION, WORKING_ID,
};
pub use property::{
    bind_bidirectional, Binding, Detach, ListenerId, Property, PropertyValue, Subscription,
    WeakProperty,
};
pub use proxy::ProxyBinder;
#[cfg(feature = "emitter")]
pub use publisher::{EmitterPublisher, EmitterPublisherError};
pub use publisher::{SaveEvent, SaveLog, SavePublisher, LANGUAGE_SAVED};
pub use store::{LanguageStore, WeakLanguageStore};

// Needed to construct an `EmitterPublisher`.
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
