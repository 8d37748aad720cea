mod support;

use language_editor::{CommandHistory, Field, FieldValue, Property};
use support::seeded_editor;

#[test]
fn php_to_php8_scenario() {
    let editor = seeded_editor();
    assert_eq!(editor.store().ids().get(), vec![1, 2, 3, 4, 5, 6]);

    editor.select(1).unwrap();
    assert_eq!(editor.working().name().get(), "PHP");

    editor.working().name().set("PHP8".into());
    assert!(editor.can_undo());

    editor.undo();
    let php = editor.store().find_by_id(1).unwrap();
    assert_eq!(php.name().get(), "PHP");
    assert_eq!(editor.working().name().get(), "PHP");
    assert!(editor.can_redo());

    editor.redo();
    assert_eq!(php.name().get(), "PHP8");
    assert_eq!(editor.working().name().get(), "PHP8");
}

#[test]
fn n_undos_restore_and_n_redos_replay() {
    let editor = seeded_editor();
    editor.select(5).unwrap();

    let years = [1998_i64, 2010, 2024, 2025];
    for year in years {
        editor.working().published_year().set(year);
    }

    for _ in years {
        assert!(editor.undo());
    }
    assert_eq!(editor.working().published_year().get(), 1990);
    assert!(!editor.undo());

    for _ in years {
        assert!(editor.redo());
    }
    assert_eq!(editor.working().published_year().get(), 2025);
    assert!(!editor.redo());
}

#[test]
fn new_edit_after_undo_invalidates_redo() {
    let editor = seeded_editor();
    editor.working().typing().set("gradual".into());
    editor.undo();
    assert!(editor.can_redo());

    editor.working().typing().set("static".into());
    assert!(!editor.can_redo());
    assert!(!editor.redo());
    assert_eq!(editor.working().typing().get(), "static");
}

#[test]
fn undo_and_redo_never_push_commands() {
    let editor = seeded_editor();
    editor.working().name().set("PHP7".into());
    editor.working().name().set("PHP8".into());

    let history = editor.history();
    assert_eq!((history.undo_len(), history.redo_len()), (2, 0));

    editor.undo();
    assert_eq!((history.undo_len(), history.redo_len()), (1, 1));
    editor.undo();
    assert_eq!((history.undo_len(), history.redo_len()), (0, 2));
    editor.redo();
    assert_eq!((history.undo_len(), history.redo_len()), (1, 1));
}

#[test]
fn undo_reaches_a_language_that_is_no_longer_selected() {
    let editor = seeded_editor();
    editor.working().name().set("PHP8".into());
    editor.select(2).unwrap();

    editor.undo();
    assert_eq!(editor.store().find_by_id(1).unwrap().name().get(), "PHP");
    assert_eq!(editor.working().name().get(), "Java");
    assert_eq!(editor.history().undo_len(), 0);
}

#[test]
fn edits_through_the_record_are_captured_while_selected() {
    let editor = seeded_editor();
    let php = editor.store().find_by_id(1).unwrap();

    php.set(Field::Developer, FieldValue::from("The PHP Group")).unwrap();
    assert_eq!(editor.history().undo_len(), 1);

    editor.undo();
    assert_eq!(editor.working().developer().get(), "Rasmus Lerdorf");
}

#[test]
fn can_undo_property_tracks_the_stack() {
    let editor = seeded_editor();
    let flags = Property::new(Vec::<bool>::new());
    let sink = flags.clone();
    editor.can_undo_property().subscribe(move |_, enabled| {
        let mut seen = sink.get();
        seen.push(*enabled);
        sink.set(seen);
    });

    editor.working().name().set("PHP8".into());
    editor.undo();
    editor.redo();

    assert_eq!(flags.get(), vec![true, false, true]);
}

#[test]
fn standalone_history_over_plain_properties() {
    let history = CommandHistory::new();
    let title = Property::with_name("title", String::from("Programmiersprachen"));
    let _tracking = history.track(&title);

    title.set("Languages".into());
    history.undo();

    assert_eq!(title.get(), "Programmiersprachen");
    assert_eq!(history.redo_len(), 1);
}

#[test]
fn removing_the_edited_language_empties_its_history() {
    let editor = seeded_editor();
    editor.working().name().set("PHP8".into());
    assert!(editor.can_undo());

    editor.remove().unwrap();
    assert!(!editor.can_undo());
    assert!(!editor.undo());
    assert_eq!(editor.languages().len(), 5);
}

#[test]
fn undo_after_removal_reaches_the_remaining_languages() {
    let editor = seeded_editor();
    editor.select(2).unwrap();
    editor.working().developer().set("Oracle".into());
    editor.select(1).unwrap();
    editor.working().developer().set("The PHP Group".into());

    editor.remove().unwrap();
    assert_eq!(editor.history().undo_len(), 1);

    assert!(editor.undo());
    let java = editor.store().find_by_id(2).unwrap();
    assert_eq!(java.developer().get(), "James Gosling");
    assert!(editor.can_redo());
}
