use serde::{Deserialize, Serialize};

use super::LanguageId;

/// Plain copy of a language's values, used for seed data, configuration
/// files and save payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSnapshot {
    pub id: LanguageId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub published_year: i64,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub typing: String,
    #[serde(default)]
    pub paradigms: String,
    #[serde(default)]
    pub stackoverflow_tags: String,
}

impl LanguageSnapshot {
    pub fn new(
        id: LanguageId,
        name: impl Into<String>,
        published_year: i64,
        developer: impl Into<String>,
        typing: impl Into<String>,
        paradigms: impl Into<String>,
        stackoverflow_tags: impl Into<String>,
    ) -> Self {
        LanguageSnapshot {
            id,
            name: name.into(),
            published_year,
            developer: developer.into(),
            typing: typing.into(),
            paradigms: paradigms.into(),
            stackoverflow_tags: stackoverflow_tags.into(),
        }
    }

    /// A snapshot carrying only an id; every other field is empty.
    pub fn with_id(id: LanguageId) -> Self {
        LanguageSnapshot {
            id,
            ..LanguageSnapshot::default()
        }
    }
}

/// The six languages an editor starts with unless configured otherwise.
pub fn seed_languages() -> Vec<LanguageSnapshot> {
    vec![
        LanguageSnapshot::new(
            1,
            "PHP",
            1995,
            "Rasmus Lerdorf",
            "dynamic, weak",
            "imperative, object-oriented",
            "php",
        ),
        LanguageSnapshot::new(
            2,
            "Java",
            1995,
            "James Gosling",
            "static, strong",
            "object-oriented",
            "java",
        ),
        LanguageSnapshot::new(
            3,
            "C#",
            2000,
            "Anders Hejlsberg",
            "static, strong",
            "object-oriented, functional",
            "c#",
        ),
        LanguageSnapshot::new(
            4,
            "C",
            1972,
            "Dennis Ritchie",
            "static, weak",
            "imperative, procedural",
            "c",
        ),
        LanguageSnapshot::new(
            5,
            "Haskell",
            1990,
            "Simon Peyton Jones",
            "static, strong",
            "functional",
            "haskell",
        ),
        LanguageSnapshot::new(
            6,
            "Javascript",
            1995,
            "Brendan Eich",
            "dynamic, weak",
            "multi-paradigm",
            "javascript",
        ),
    ]
}
