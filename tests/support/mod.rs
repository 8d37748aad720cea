#![allow(dead_code)]

use language_editor::{EditorConfig, Language, LanguageEditor, LanguageSnapshot};
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness. Set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn names(languages: &[Language]) -> Vec<String> {
    languages.iter().map(|language| language.name().get()).collect()
}

/// An editor whose store holds one language per name, with ids 1, 2, ...
pub fn editor_with(names: &[&str]) -> LanguageEditor {
    init_tracing();
    let seed = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut snapshot = LanguageSnapshot::with_id(index as i64 + 1);
            snapshot.name = name.to_string();
            snapshot
        })
        .collect();

    LanguageEditor::from_config(EditorConfig::new().with_seed(seed).with_initial_selection(None))
        .expect("valid seed")
}

/// The default editor with the six seed languages and language 1 selected.
pub fn seeded_editor() -> LanguageEditor {
    init_tracing();
    LanguageEditor::new()
}
