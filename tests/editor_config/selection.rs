use language_editor::EditorConfig;

use super::editor;

#[test]
fn selection_changes_can_be_undone() {
    let editor = editor(EditorConfig::new().with_undoable_selection(true));
    assert!(!editor.can_undo());

    editor.select(2).unwrap();
    editor.working().name().set("Java 21".into());
    assert_eq!(editor.history().undo_len(), 2);

    editor.undo();
    assert_eq!(editor.working().name().get(), "Java");
    editor.undo();
    assert_eq!(editor.selected_id(), Some(1));
    assert_eq!(editor.working().name().get(), "PHP");

    editor.redo();
    editor.redo();
    assert_eq!(editor.selected_id(), Some(2));
    assert_eq!(editor.working().name().get(), "Java 21");
}

#[test]
fn selection_is_not_undoable_by_default() {
    let editor = editor(EditorConfig::new());
    editor.select(3).unwrap();
    editor.clear_selection();

    assert!(!editor.can_undo());
}

#[test]
fn reset_on_deselect_clears_the_working_record() {
    let editor = editor(EditorConfig::new().with_reset_working_on_deselect(true));
    editor.select(5).unwrap();
    assert_eq!(editor.working().developer().get(), "Simon Peyton Jones");

    editor.clear_selection();
    assert_eq!(editor.working().name().get(), "");
    assert_eq!(editor.working().published_year().get(), 0);

    assert_eq!(editor.store().find_by_id(5).unwrap().name().get(), "Haskell");
    assert!(!editor.can_undo());
}

#[test]
fn undo_never_restores_a_removed_selection() {
    let editor = editor(EditorConfig::new().with_undoable_selection(true));
    editor.select(2).unwrap();

    editor.remove().unwrap();
    editor.undo();

    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.bound_id(), None);
    assert!(editor.remove().unwrap().is_none());
}

#[test]
fn selection_steps_through_removed_languages_are_dropped() {
    let editor = editor(EditorConfig::new().with_undoable_selection(true));
    editor.select(2).unwrap();
    editor.select(3).unwrap();
    editor.select(4).unwrap();

    editor.remove_language(2).unwrap();
    assert_eq!(editor.history().undo_len(), 1);

    assert!(editor.undo());
    assert_eq!(editor.selected_id(), Some(3));
    assert_eq!(editor.working().name().get(), "C#");
    assert!(!editor.undo());
}

#[test]
fn removing_an_unselected_language_keeps_selection_history() {
    let editor = editor(EditorConfig::new().with_undoable_selection(true));
    editor.select(2).unwrap();
    editor.select(3).unwrap();

    editor.remove_language(6).unwrap();
    editor.undo();
    editor.undo();

    assert_eq!(editor.selected_id(), Some(1));
    assert_eq!(editor.working().name().get(), "PHP");
}
