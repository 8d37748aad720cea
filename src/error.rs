use std::fmt;

use crate::language::{Field, LanguageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    NotFound(LanguageId),
    DuplicateId(LanguageId),
    InvalidId(LanguageId),
    FieldType {
        field: Field,
        expected: &'static str,
    },
    Config(String),
    Publish(String),
    Serde(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::NotFound(id) => write!(f, "no language with id {}", id),
            EditorError::DuplicateId(id) => {
                write!(f, "a language with id {} already exists", id)
            }
            EditorError::InvalidId(id) => {
                write!(f, "language id {} is reserved (ids must be positive)", id)
            }
            EditorError::FieldType { field, expected } => write!(
                f,
                "field {} expects {} value",
                field.name(),
                expected
            ),
            EditorError::Config(message) => write!(f, "config error: {}", message),
            EditorError::Publish(message) => write!(f, "publish error: {}", message),
            EditorError::Serde(message) => write!(f, "serialization error: {}", message),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Serde(err.to_string())
    }
}
