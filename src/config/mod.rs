//! Editor configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```
//! use language_editor::EditorConfig;
//!
//! let config = EditorConfig::from_json(r#"{ "history_limit": 50 }"#).unwrap();
//! assert_eq!(config.history_limit, Some(50));
//! assert_eq!(config.seed.len(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::language::{seed_languages, LanguageId, LanguageSnapshot};

pub const DEFAULT_TITLE: &str = "Programmiersprachen";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Application title shown by the presentation layer.
    pub title: String,
    /// Language selected right after start-up.
    pub initial_selection: Option<LanguageId>,
    /// Maximum number of undo entries; unbounded when `None`.
    pub history_limit: Option<usize>,
    /// Record selection changes in the undo history as well.
    pub undoable_selection: bool,
    /// Clear the working record when nothing is selected instead of keeping
    /// the values of the last selected language.
    pub reset_working_on_deselect: bool,
    /// Languages the store starts with.
    pub seed: Vec<LanguageSnapshot>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            title: DEFAULT_TITLE.to_string(),
            initial_selection: Some(1),
            history_limit: None,
            undoable_selection: false,
            reset_working_on_deselect: false,
            seed: seed_languages(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        serde_json::from_str(json).map_err(|err| EditorError::Config(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_initial_selection(mut self, id: Option<LanguageId>) -> Self {
        self.initial_selection = id;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_undoable_selection(mut self, enabled: bool) -> Self {
        self.undoable_selection = enabled;
        self
    }

    pub fn with_reset_working_on_deselect(mut self, enabled: bool) -> Self {
        self.reset_working_on_deselect = enabled;
        self
    }

    pub fn with_seed(mut self, seed: Vec<LanguageSnapshot>) -> Self {
        self.seed = seed;
        self
    }
}
