use notemark_core::{FolderColor, NoteStore, StoreSnapshot};
use std::fs;
use uuid::Uuid;

fn populated_store() -> NoteStore {
    let mut store = NoteStore::new();
    let personal = store
        .add_folder("Personal", "person.fill", FolderColor::Blue)
        .unwrap();
    let work = store
        .add_folder("Work", "briefcase.fill", FolderColor::Purple)
        .unwrap();
    store
        .add_note("Shopping List", "1. Groceries\n2. Household items", personal)
        .unwrap();
    let read_note = store.add_note("Standup", "notes...", work).unwrap();
    store.mark_note_read(read_note, work).unwrap();
    store.select_folder(Some(work));
    store
}

#[test]
fn snapshot_round_trips_through_json_file() {
    let store = populated_store();
    let snapshot = store.snapshot();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notemark-session.json");
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    let loaded: StoreSnapshot = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, snapshot);

    let restored = NoteStore::from_snapshot(loaded);
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.selected_folder().map(|f| f.name.clone()), Some("Work".to_string()));
    assert_eq!(restored.total_unread_count(), store.total_unread_count());
}

#[test]
fn snapshot_preserves_ids_timestamps_and_unread_flags() {
    let store = populated_store();
    let snapshot = store.snapshot();
    let restored = NoteStore::from_snapshot(snapshot);

    for (original, loaded) in store.folders().iter().zip(restored.folders()) {
        assert_eq!(original.id, loaded.id);
        assert_eq!(original.color, loaded.color);
        for (a, b) in original.notes.iter().zip(&loaded.notes) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.created_at, b.created_at);
            assert_eq!(a.modified_at, b.modified_at);
            assert_eq!(a.is_unread, b.is_unread);
        }
    }
}

#[test]
fn from_snapshot_drops_selection_of_missing_folder() {
    let store = populated_store();
    let mut snapshot = store.snapshot();
    snapshot.selected_folder_id = Some(Uuid::new_v4());

    let restored = NoteStore::from_snapshot(snapshot);
    assert!(restored.selected_folder().is_none());
}
