//! Proxy binding - keeps the single working record wired to whichever
//! language is selected.
//!
//! The binder is a two-state machine: `Unbound` or bound to one language.
//! Moving to a new language first disables undo capture on the old one and
//! unbinds its fields, then binds every field of the new language to the
//! working record (which takes the language's values) and enables capture.

use crate::history::{CommandHistory, LanguageCapture};
use crate::language::{Field, FieldPairVisitor, Language, LanguageId, WORKING_ID};
use crate::property::{bind_bidirectional, Detach, Property, PropertyValue};

struct BoundLanguage {
    language: Language,
    bindings: Vec<Box<dyn Detach>>,
    capture: LanguageCapture,
}

struct Binder {
    bindings: Vec<Box<dyn Detach>>,
}

impl FieldPairVisitor for Binder {
    fn visit<T: PropertyValue>(
        &mut self,
        _field: Field,
        working: &Property<T>,
        record: &Property<T>,
    ) {
        self.bindings.push(Box::new(bind_bidirectional(working, record)));
    }
}

/// Owner of the working record.
pub struct ProxyBinder {
    working: Language,
    history: CommandHistory,
    bound: Option<BoundLanguage>,
    reset_on_deselect: bool,
}

impl ProxyBinder {
    pub fn new(history: CommandHistory) -> Self {
        ProxyBinder {
            working: Language::new(WORKING_ID),
            history,
            bound: None,
            reset_on_deselect: false,
        }
    }

    /// Clear the working record whenever the binder becomes unbound.
    /// By default it keeps the values of the last bound language.
    pub fn with_reset_on_deselect(mut self, reset: bool) -> Self {
        self.reset_on_deselect = reset;
        self
    }

    /// The working record. Writes to its fields reach the bound language.
    pub fn working(&self) -> &Language {
        &self.working
    }

    pub fn bound_id(&self) -> Option<LanguageId> {
        self.bound.as_ref().map(|bound| bound.language.id())
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Move to `language`, or to `Unbound` for `None`.
    ///
    /// Binding the language that is already bound is a no-op.
    pub fn bind(&mut self, language: Option<&Language>) {
        match (&self.bound, language) {
            (Some(bound), Some(next)) if bound.language.is_same(next) => return,
            (None, None) => return,
            _ => {}
        }

        self.release();

        match language {
            Some(next) => self.attach(next),
            None if self.reset_on_deselect => self.working.clear(),
            None => {}
        }
    }

    /// Move to `Unbound`.
    pub fn unbind(&mut self) {
        self.bind(None);
    }

    fn release(&mut self) {
        let Some(bound) = self.bound.take() else {
            return;
        };

        bound.capture.disable();
        for binding in &bound.bindings {
            binding.detach();
        }
        tracing::debug!("unbound working copy from language {}", bound.language.id());
    }

    fn attach(&mut self, language: &Language) {
        let mut binder = Binder {
            bindings: Vec::with_capacity(Field::ALL.len()),
        };
        self.working.zip_fields(language, &mut binder);
        let capture = LanguageCapture::enable(&self.history, language);

        tracing::debug!("bound working copy to language {}", language.id());
        self.bound = Some(BoundLanguage {
            language: language.clone(),
            bindings: binder.bindings,
            capture,
        });
    }
}

impl Drop for ProxyBinder {
    fn drop(&mut self) {
        self.release();
    }
}
