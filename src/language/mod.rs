//! The language record: an id plus six individually observable fields.

mod field;
mod snapshot;

pub use field::{Field, FieldValue};
pub use snapshot::{seed_languages, LanguageSnapshot};

use std::fmt;

use crate::error::EditorError;
use crate::property::{Property, PropertyValue};

pub type LanguageId = i64;

/// Legacy "nothing selected" id. Every id `<= 0` is reserved.
pub const NO_SELECTION: LanguageId = -1;

/// Id carried by the editor's working record.
pub const WORKING_ID: LanguageId = 0;

/// Callback over every field of one language.
pub trait FieldVisitor {
    fn visit<T: PropertyValue>(&mut self, field: Field, property: &Property<T>);
}

/// Callback over the matching fields of two languages.
pub trait FieldPairVisitor {
    fn visit<T: PropertyValue>(&mut self, field: Field, left: &Property<T>, right: &Property<T>);
}

/// A language record.
///
/// `Language` is a handle: clones share the same field cells, so a clone
/// handed to the presentation layer observes every write made through the
/// store, the binder or the history.
#[derive(Clone)]
pub struct Language {
    id: LanguageId,
    name: Property<String>,
    published_year: Property<i64>,
    developer: Property<String>,
    typing: Property<String>,
    paradigms: Property<String>,
    stackoverflow_tags: Property<String>,
}

impl Language {
    /// A language with the given id and empty fields.
    pub fn new(id: LanguageId) -> Self {
        Language::from_snapshot(&LanguageSnapshot::with_id(id))
    }

    pub fn from_snapshot(snapshot: &LanguageSnapshot) -> Self {
        Language {
            id: snapshot.id,
            name: Property::with_name("name", snapshot.name.clone()),
            published_year: Property::with_name("published_year", snapshot.published_year),
            developer: Property::with_name("developer", snapshot.developer.clone()),
            typing: Property::with_name("typing", snapshot.typing.clone()),
            paradigms: Property::with_name("paradigms", snapshot.paradigms.clone()),
            stackoverflow_tags: Property::with_name(
                "stackoverflow_tags",
                snapshot.stackoverflow_tags.clone(),
            ),
        }
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn name(&self) -> &Property<String> {
        &self.name
    }

    pub fn published_year(&self) -> &Property<i64> {
        &self.published_year
    }

    pub fn developer(&self) -> &Property<String> {
        &self.developer
    }

    pub fn typing(&self) -> &Property<String> {
        &self.typing
    }

    pub fn paradigms(&self) -> &Property<String> {
        &self.paradigms
    }

    pub fn stackoverflow_tags(&self) -> &Property<String> {
        &self.stackoverflow_tags
    }

    fn text_property(&self, field: Field) -> Option<&Property<String>> {
        match field {
            Field::Name => Some(&self.name),
            Field::Developer => Some(&self.developer),
            Field::Typing => Some(&self.typing),
            Field::Paradigms => Some(&self.paradigms),
            Field::StackoverflowTags => Some(&self.stackoverflow_tags),
            Field::PublishedYear => None,
        }
    }

    pub fn get(&self, field: Field) -> FieldValue {
        match self.text_property(field) {
            Some(property) => FieldValue::Text(property.get()),
            None => FieldValue::Integer(self.published_year.get()),
        }
    }

    /// Write a field by name. The value kind must match the field.
    pub fn set(&self, field: Field, value: FieldValue) -> Result<(), EditorError> {
        match value {
            FieldValue::Integer(year) if field.is_integer() => {
                self.published_year.set(year);
                Ok(())
            }
            FieldValue::Integer(_) => Err(EditorError::FieldType {
                field,
                expected: "a text",
            }),
            FieldValue::Text(text) => match self.text_property(field) {
                Some(property) => {
                    property.set(text);
                    Ok(())
                }
                None => Err(EditorError::FieldType {
                    field,
                    expected: "an integer",
                }),
            },
        }
    }

    /// Write every field from `snapshot`. The id is left untouched.
    pub fn assign(&self, snapshot: &LanguageSnapshot) {
        self.name.set(snapshot.name.clone());
        self.published_year.set(snapshot.published_year);
        self.developer.set(snapshot.developer.clone());
        self.typing.set(snapshot.typing.clone());
        self.paradigms.set(snapshot.paradigms.clone());
        self.stackoverflow_tags.set(snapshot.stackoverflow_tags.clone());
    }

    /// Reset every field to its empty value.
    pub fn clear(&self) {
        self.assign(&LanguageSnapshot::with_id(self.id));
    }

    pub fn snapshot(&self) -> LanguageSnapshot {
        LanguageSnapshot {
            id: self.id,
            name: self.name.get(),
            published_year: self.published_year.get(),
            developer: self.developer.get(),
            typing: self.typing.get(),
            paradigms: self.paradigms.get(),
            stackoverflow_tags: self.stackoverflow_tags.get(),
        }
    }

    /// Case-insensitive substring match on the name. Empty text matches.
    pub fn matches(&self, search_text: &str) -> bool {
        if search_text.is_empty() {
            return true;
        }
        let needle = search_text.to_lowercase();
        self.name.with(|name| name.to_lowercase().contains(&needle))
    }

    /// Whether both handles refer to the same record cells.
    pub fn is_same(&self, other: &Language) -> bool {
        self.id == other.id && self.name.ptr_eq(&other.name)
    }

    pub fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.visit(Field::Name, &self.name);
        visitor.visit(Field::PublishedYear, &self.published_year);
        visitor.visit(Field::Developer, &self.developer);
        visitor.visit(Field::Typing, &self.typing);
        visitor.visit(Field::Paradigms, &self.paradigms);
        visitor.visit(Field::StackoverflowTags, &self.stackoverflow_tags);
    }

    pub fn zip_fields<V: FieldPairVisitor>(&self, other: &Language, visitor: &mut V) {
        visitor.visit(Field::Name, &self.name, &other.name);
        visitor.visit(
            Field::PublishedYear,
            &self.published_year,
            &other.published_year,
        );
        visitor.visit(Field::Developer, &self.developer, &other.developer);
        visitor.visit(Field::Typing, &self.typing, &other.typing);
        visitor.visit(Field::Paradigms, &self.paradigms, &other.paradigms);
        visitor.visit(
            Field::StackoverflowTags,
            &self.stackoverflow_tags,
            &other.stackoverflow_tags,
        );
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("id", &self.id)
            .field("name", &self.name.get())
            .field("published_year", &self.published_year.get())
            .field("developer", &self.developer.get())
            .field("typing", &self.typing.get())
            .field("paradigms", &self.paradigms.get())
            .field("stackoverflow_tags", &self.stackoverflow_tags.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn java() -> Language {
        Language::from_snapshot(&LanguageSnapshot::new(
            2,
            "Java",
            1995,
            "James Gosling",
            "static",
            "object-oriented",
            "java",
        ))
    }

    #[test]
    fn snapshot_round_trip() {
        let language = java();
        let snapshot = language.snapshot();
        assert_eq!(snapshot.name, "Java");
        assert_eq!(Language::from_snapshot(&snapshot).snapshot(), snapshot);
    }

    #[test]
    fn dynamic_get_and_set() {
        let language = java();

        language.set(Field::Developer, "Oracle".into()).unwrap();
        language.set(Field::PublishedYear, FieldValue::Integer(1996)).unwrap();

        assert_eq!(language.get(Field::Developer), FieldValue::Text("Oracle".into()));
        assert_eq!(language.published_year().get(), 1996);
    }

    #[test]
    fn dynamic_set_rejects_wrong_kind() {
        let language = java();

        let err = language.set(Field::PublishedYear, "soon".into()).unwrap_err();
        assert_eq!(
            err,
            EditorError::FieldType {
                field: Field::PublishedYear,
                expected: "an integer",
            }
        );
        assert!(language.set(Field::Name, 42_i64.into()).is_err());
        assert_eq!(language.name().get(), "Java");
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let language = java();
        assert!(language.matches("java"));
        assert!(language.matches("AV"));
        assert!(language.matches(""));
        assert!(!language.matches("script"));
    }

    #[test]
    fn clones_share_fields() {
        let language = java();
        let handle = language.clone();
        handle.name().set("Java 21".into());

        assert_eq!(language.name().get(), "Java 21");
        assert!(language.is_same(&handle));
        assert!(!language.is_same(&java()));
    }

    #[test]
    fn clear_keeps_id() {
        let language = java();
        language.clear();
        assert_eq!(language.snapshot(), LanguageSnapshot::with_id(2));
    }

    #[test]
    fn visitor_sees_every_field() {
        struct Names(Vec<&'static str>);
        impl FieldVisitor for Names {
            fn visit<T: PropertyValue>(&mut self, field: Field, property: &Property<T>) {
                assert_eq!(field.name(), property.name());
                self.0.push(field.name());
            }
        }

        let mut names = Names(Vec::new());
        java().visit_fields(&mut names);
        assert_eq!(names.0.len(), Field::ALL.len());
    }
}
