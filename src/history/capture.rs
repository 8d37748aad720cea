use crate::language::{Field, FieldVisitor, Language, LanguageId};
use crate::property::{Detach, Property, PropertyValue};

use super::CommandHistory;

/// Capture listeners attached to every field of one language.
///
/// While enabled, each field write on the language is recorded in the
/// history. [`disable`](Self::disable) removes the listeners again.
pub struct LanguageCapture {
    language_id: LanguageId,
    subscriptions: Vec<Box<dyn Detach>>,
}

struct Tracker<'a> {
    history: &'a CommandHistory,
    owner: LanguageId,
    subscriptions: Vec<Box<dyn Detach>>,
}

impl FieldVisitor for Tracker<'_> {
    fn visit<T: PropertyValue>(&mut self, _field: Field, property: &Property<T>) {
        let subscription = self.history.track_for(property, self.owner);
        self.subscriptions.push(Box::new(subscription));
    }
}

impl LanguageCapture {
    pub fn enable(history: &CommandHistory, language: &Language) -> Self {
        let mut tracker = Tracker {
            history,
            owner: language.id(),
            subscriptions: Vec::with_capacity(Field::ALL.len()),
        };
        language.visit_fields(&mut tracker);

        LanguageCapture {
            language_id: language.id(),
            subscriptions: tracker.subscriptions,
        }
    }

    pub fn language_id(&self) -> LanguageId {
        self.language_id
    }

    pub fn disable(&self) {
        for subscription in &self.subscriptions {
            subscription.detach();
        }
    }
}
