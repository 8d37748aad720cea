mod save;
mod selection;

use language_editor::{EditorConfig, LanguageEditor};

fn editor(config: EditorConfig) -> LanguageEditor {
    LanguageEditor::from_config(config).unwrap()
}

#[test]
fn config_round_trips_through_json() {
    let config = EditorConfig::new()
        .with_title("Languages")
        .with_history_limit(10)
        .with_undoable_selection(true);

    let json = config.to_json().unwrap();
    let parsed = EditorConfig::from_json(&json).unwrap();
    assert_eq!(parsed, config);

    let editor = editor(parsed);
    assert_eq!(editor.title().get(), "Languages");
    assert_eq!(editor.history().limit(), Some(10));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = EditorConfig::from_json(r#"{ "initial_selection": 4 }"#).unwrap();
    let editor = editor(config);

    assert_eq!(editor.title().get(), "Programmiersprachen");
    assert_eq!(editor.languages().len(), 6);
    assert_eq!(editor.working().name().get(), "C");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = EditorConfig::from_json("{ title: }").unwrap_err();
    assert!(err.to_string().starts_with("config error"));
}

#[test]
fn history_limit_drops_the_oldest_edits() {
    let editor = editor(EditorConfig::new().with_history_limit(2));

    for name in ["PHP5", "PHP7", "PHP8"] {
        editor.working().name().set(name.into());
    }
    assert_eq!(editor.history().undo_len(), 2);

    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert_eq!(editor.working().name().get(), "PHP5");
}

#[test]
fn no_initial_selection_leaves_working_record_empty() {
    let editor = editor(EditorConfig::new().with_initial_selection(None));

    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.working().name().get(), "");
    assert_eq!(editor.working().id(), language_editor::WORKING_ID);
}
