use std::fmt;

use serde::{Deserialize, Serialize};

/// The editable fields of a [`Language`](super::Language).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    PublishedYear,
    Developer,
    Typing,
    Paradigms,
    StackoverflowTags,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::PublishedYear,
        Field::Developer,
        Field::Typing,
        Field::Paradigms,
        Field::StackoverflowTags,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::PublishedYear => "published_year",
            Field::Developer => "developer",
            Field::Typing => "typing",
            Field::Paradigms => "paradigms",
            Field::StackoverflowTags => "stackoverflow_tags",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Field::PublishedYear)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field value read or written by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}
