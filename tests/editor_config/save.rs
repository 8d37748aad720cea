use language_editor::{EditorConfig, SaveLog};

use super::editor;

#[cfg(feature = "emitter")]
#[test]
fn save_emits_the_edited_language() {
    use language_editor::{EmitterPublisher, EventEmitter, SaveEvent};
    use std::sync::mpsc;
    use std::time::Duration;

    let editor = editor(EditorConfig::new());
    let mut publisher = EmitterPublisher::new(EventEmitter::new());
    let (tx, rx) = mpsc::channel::<SaveEvent>();
    publisher.on_save(move |event: SaveEvent| {
        tx.send(event).unwrap();
    });

    editor.select(6).unwrap();
    editor.working().name().set("JavaScript".into());
    let published = editor.save(&mut publisher).unwrap().unwrap();

    let received = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(received, published);
    assert_eq!(received.sequence, 1);
    assert_eq!(received.language.id, 6);
    assert_eq!(received.language.name, "JavaScript");
    assert_eq!(received.language.developer, "Brendan Eich");
}

#[cfg(feature = "emitter")]
#[test]
fn panicking_listener_fails_the_save() {
    use language_editor::{EditorError, EmitterPublisher, EventEmitter, SaveEvent};

    let editor = editor(EditorConfig::new());
    let mut publisher = EmitterPublisher::new(EventEmitter::new());
    publisher.on_save(|_: SaveEvent| panic!("disk full"));

    let err = editor.save(&mut publisher).unwrap_err();
    assert_eq!(err, EditorError::Publish("1 save listener(s) panicked".to_string()));
    assert_eq!(editor.save_count(), 0);
}

#[test]
fn save_does_not_touch_history() {
    let editor = editor(EditorConfig::new());
    let mut log = SaveLog::new();

    editor.working().name().set("PHP8".into());
    editor.save(&mut log).unwrap();

    assert_eq!(editor.history().undo_len(), 1);
    assert_eq!(log.last_saved(1).unwrap().name, "PHP8");
}

#[test]
fn save_log_tracks_unsaved_edits_per_language() {
    let editor = editor(EditorConfig::new());
    let mut log = SaveLog::new();

    editor.save(&mut log).unwrap();
    editor.select(2).unwrap();
    editor.save(&mut log).unwrap();

    editor.working().typing().set("static, strong, nominal".into());
    let php = editor.store().find_by_id(1).unwrap().snapshot();
    let java = editor.store().find_by_id(2).unwrap().snapshot();
    assert!(!log.is_unsaved(&php));
    assert!(log.is_unsaved(&java));

    let event = editor.save(&mut log).unwrap().unwrap();
    assert_eq!(event.sequence, 3);
    assert!(!log.is_unsaved(&java.clone()));
    assert_eq!(log.len(), 3);
}
