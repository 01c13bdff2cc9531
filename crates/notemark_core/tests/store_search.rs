use notemark_core::{Folder, FolderColor, Note, NoteStore};

fn folder_named(name: &str) -> Folder {
    Folder::new(name, "folder.fill", FolderColor::Blue)
}

#[test]
fn empty_search_returns_all_folders() {
    let mut store = NoteStore::new();
    store.add_folder("Personal", "person.fill", FolderColor::Blue).unwrap();
    store.add_folder("Work", "briefcase.fill", FolderColor::Purple).unwrap();

    assert_eq!(store.folders_matching("").len(), 2);
    assert_eq!(store.filtered_folders().len(), 2);
}

#[test]
fn search_matches_folder_name_case_insensitively() {
    let mut store = NoteStore::new();
    store.add_folder("Personal", "person.fill", FolderColor::Blue).unwrap();
    store.add_folder("Work", "briefcase.fill", FolderColor::Purple).unwrap();

    let matched = store.folders_matching("work");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Work");
}

#[test]
fn search_matches_note_title_and_content() {
    let mut store = NoteStore::new();
    let personal = store
        .add_folder("Personal", "person.fill", FolderColor::Blue)
        .unwrap();
    let work = store
        .add_folder("Work", "briefcase.fill", FolderColor::Purple)
        .unwrap();
    store.add_note("Groceries", "milk and eggs", personal).unwrap();
    store.add_note("Standup", "quarterly ROADMAP review", work).unwrap();

    let by_title = store.folders_matching("grocer");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].name, "Personal");

    let by_content = store.folders_matching("roadmap");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].name, "Work");
}

#[test]
fn matching_folders_are_returned_whole() {
    // Filtering is folder-granular: a single matching note returns the
    // folder with all of its notes.
    let mut store = NoteStore::new();
    let folder_id = store
        .add_folder("Mixed", "folder.fill", FolderColor::Blue)
        .unwrap();
    store.add_note("matching note", "", folder_id).unwrap();
    store.add_note("other", "", folder_id).unwrap();

    let matched = store.folders_matching("matching");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].notes.len(), 2);
}

#[test]
fn stored_search_text_drives_filtered_folders() {
    let mut store = NoteStore::new();
    store.add_folder("Personal", "person.fill", FolderColor::Blue).unwrap();
    store.add_folder("Work", "briefcase.fill", FolderColor::Purple).unwrap();

    store.set_search_text("PERSON");
    let filtered = store.filtered_folders();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Personal");
}

#[test]
fn sorted_notes_orders_by_modified_descending() {
    let mut store = NoteStore::new();
    let folder_id = store
        .add_folder("Inbox", "folder.fill", FolderColor::Blue)
        .unwrap();
    let oldest = store.add_note("oldest", "", folder_id).unwrap();
    let middle = store.add_note("middle", "", folder_id).unwrap();
    let newest = store.add_note("newest", "", folder_id).unwrap();

    // Touch the first note last so modification order differs from insertion.
    store.update_note(oldest, folder_id, "oldest", "edited").unwrap();

    let folder = &store.folders()[0];
    let ids: Vec<_> = folder.sorted_notes().iter().map(|note| note.id).collect();
    assert_eq!(ids[0], oldest);
    assert!(ids.contains(&middle) && ids.contains(&newest));
}

#[test]
fn sorted_notes_is_stable_across_repeated_reads() {
    let mut folder = folder_named("Inbox");
    let mut a = Note::new("a", "");
    let mut b = Note::new("b", "");
    let shared = a.created_at;
    a.modified_at = shared;
    b.created_at = shared;
    b.modified_at = shared;
    folder.notes.push(a);
    folder.notes.push(b);

    let first: Vec<_> = folder.sorted_notes().iter().map(|n| n.id).collect();
    let second: Vec<_> = folder.sorted_notes().iter().map(|n| n.id).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], folder.notes[0].id);
}

#[test]
fn total_unread_count_sums_across_folders() {
    let mut store = NoteStore::new();
    let first = store
        .add_folder("First", "folder.fill", FolderColor::Blue)
        .unwrap();
    let second = store
        .add_folder("Second", "folder.fill", FolderColor::Green)
        .unwrap();
    let read_me = store.add_note("a", "", first).unwrap();
    store.add_note("b", "", first).unwrap();
    store.add_note("c", "", second).unwrap();
    assert_eq!(store.total_unread_count(), 3);

    store.mark_note_read(read_me, first).unwrap();
    assert_eq!(store.total_unread_count(), 2);
}
