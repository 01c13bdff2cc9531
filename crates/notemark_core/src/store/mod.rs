//! In-memory note/folder store.
//!
//! # Responsibility
//! - Own the session's folders and notes as the single source of truth.
//! - Provide CRUD mutations with typed failures plus pure search/sort reads.
//! - Notify registered observers synchronously after each committed mutation.
//!
//! # Invariants
//! - Every note belongs to exactly one folder; IDs are unique store-wide and
//!   never reused.
//! - A failed operation leaves no partial mutation behind and emits no event.
//! - Deleting a folder cascades to its notes; orphan notes cannot exist.

pub mod snapshot;

use crate::model::folder::{Folder, FolderColor, FolderId};
use crate::model::note::{Note, NoteId};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Typed failure for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Folder name is blank after trimming.
    EmptyFolderName,
    /// Note title is blank after trimming.
    EmptyNoteTitle,
    /// Referenced folder does not exist.
    FolderNotFound(FolderId),
    /// Referenced note does not exist in the referenced folder.
    NoteNotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFolderName => write!(f, "folder name must not be blank"),
            Self::EmptyNoteTitle => write!(f, "note title must not be blank"),
            Self::FolderNotFound(id) => write!(f, "folder not found: {id}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Change notification delivered to observers after a mutation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FolderAdded(FolderId),
    /// Carries the IDs of the notes removed by the cascade.
    FolderDeleted {
        folder_id: FolderId,
        removed_notes: Vec<NoteId>,
    },
    NoteAdded {
        folder_id: FolderId,
        note_id: NoteId,
    },
    NoteDeleted {
        folder_id: FolderId,
        note_id: NoteId,
    },
    NoteUpdated {
        folder_id: FolderId,
        note_id: NoteId,
    },
    NoteMarkedRead {
        folder_id: FolderId,
        note_id: NoteId,
    },
    SelectionChanged(Option<FolderId>),
}

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// Session-scoped application state.
///
/// One instance spans the session and is handed to presentation layers by
/// reference; mutations take `&mut self`, so the borrow checker enforces the
/// single-writer contract.
#[derive(Default)]
pub struct NoteStore {
    folders: Vec<Folder>,
    selected_folder_id: Option<FolderId>,
    search_text: String,
    observers: Vec<Observer>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store owning the given folders, e.g. restored state or
    /// sample data.
    pub fn from_folders(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            ..Self::default()
        }
    }

    /// Registers an observer invoked synchronously after every committed
    /// mutation. Failed operations never reach observers.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    // --- Folder mutations ---

    /// Appends a new folder.
    ///
    /// # Errors
    /// - `EmptyFolderName` when `name` is blank after trimming.
    pub fn add_folder(
        &mut self,
        name: &str,
        icon: &str,
        color: FolderColor,
    ) -> StoreResult<FolderId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyFolderName);
        }

        let folder = Folder::new(name, icon, color);
        let folder_id = folder.id;
        self.folders.push(folder);

        info!("event=folder_added module=store status=ok folder_id={folder_id}");
        self.notify(StoreEvent::FolderAdded(folder_id));
        Ok(folder_id)
    }

    /// Removes a folder and all notes it contains.
    ///
    /// Clears the selection when it pointed at the removed folder.
    ///
    /// # Errors
    /// - `FolderNotFound` when `folder_id` is unknown.
    pub fn delete_folder(&mut self, folder_id: FolderId) -> StoreResult<()> {
        let index = self
            .folders
            .iter()
            .position(|folder| folder.id == folder_id)
            .ok_or(StoreError::FolderNotFound(folder_id))?;

        let removed = self.folders.remove(index);
        let removed_notes: Vec<NoteId> = removed.notes.iter().map(|note| note.id).collect();
        if self.selected_folder_id == Some(folder_id) {
            self.selected_folder_id = None;
        }

        info!(
            "event=folder_deleted module=store status=ok folder_id={folder_id} cascaded_notes={}",
            removed_notes.len()
        );
        self.notify(StoreEvent::FolderDeleted {
            folder_id,
            removed_notes,
        });
        Ok(())
    }

    // --- Note mutations ---

    /// Appends a new unread note to the given folder.
    ///
    /// # Errors
    /// - `FolderNotFound` when `folder_id` is unknown.
    pub fn add_note(
        &mut self,
        title: &str,
        content: &str,
        folder_id: FolderId,
    ) -> StoreResult<NoteId> {
        let folder = self.folder_mut(folder_id)?;
        let note = Note::new(title, content);
        let note_id = note.id;
        folder.notes.push(note);

        info!("event=note_added module=store status=ok folder_id={folder_id} note_id={note_id}");
        self.notify(StoreEvent::NoteAdded { folder_id, note_id });
        Ok(note_id)
    }

    /// Removes a note from the given folder.
    ///
    /// # Errors
    /// - `FolderNotFound` when `folder_id` is unknown.
    /// - `NoteNotFound` when the note is not in that folder.
    pub fn delete_note(&mut self, note_id: NoteId, folder_id: FolderId) -> StoreResult<()> {
        let folder = self.folder_mut(folder_id)?;
        let index = folder
            .notes
            .iter()
            .position(|note| note.id == note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;
        folder.notes.remove(index);

        info!("event=note_deleted module=store status=ok folder_id={folder_id} note_id={note_id}");
        self.notify(StoreEvent::NoteDeleted { folder_id, note_id });
        Ok(())
    }

    /// Clears a note's unread flag and refreshes its modification time.
    ///
    /// Idempotent on the flag; every call still bumps `modified_at`.
    ///
    /// # Errors
    /// - `FolderNotFound` / `NoteNotFound` as for [`Self::delete_note`].
    pub fn mark_note_read(&mut self, note_id: NoteId, folder_id: FolderId) -> StoreResult<()> {
        let folder = self.folder_mut(folder_id)?;
        let note = folder
            .note_mut(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;
        note.mark_read();

        debug!(
            "event=note_marked_read module=store status=ok folder_id={folder_id} note_id={note_id}"
        );
        self.notify(StoreEvent::NoteMarkedRead { folder_id, note_id });
        Ok(())
    }

    /// Replaces a note's title and content and refreshes its modification
    /// time. The stored title is trimmed.
    ///
    /// # Errors
    /// - `EmptyNoteTitle` when `title` is blank after trimming.
    /// - `FolderNotFound` / `NoteNotFound` as for [`Self::delete_note`].
    pub fn update_note(
        &mut self,
        note_id: NoteId,
        folder_id: FolderId,
        title: &str,
        content: &str,
    ) -> StoreResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyNoteTitle);
        }

        let folder = self.folder_mut(folder_id)?;
        let note = folder
            .note_mut(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;
        note.title = title.to_string();
        note.content = content.to_string();
        note.touch();

        info!("event=note_updated module=store status=ok folder_id={folder_id} note_id={note_id}");
        self.notify(StoreEvent::NoteUpdated { folder_id, note_id });
        Ok(())
    }

    // --- Selection and search state ---

    /// Sets (or clears) the selected folder.
    pub fn select_folder(&mut self, folder_id: Option<FolderId>) {
        if self.selected_folder_id == folder_id {
            return;
        }
        self.selected_folder_id = folder_id;
        self.notify(StoreEvent::SelectionChanged(folder_id));
    }

    /// Replaces the free-text search filter used by [`Self::filtered_folders`].
    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }

    // --- Reads ---

    /// All folders in insertion order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The selected folder, when one is selected and still exists.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.folder(self.selected_folder_id?)
    }

    /// Looks up one note in one folder.
    pub fn note(&self, note_id: NoteId, folder_id: FolderId) -> Option<&Note> {
        self.folder(folder_id)?.note(note_id)
    }

    /// Sum of unread notes across all folders.
    pub fn total_unread_count(&self) -> usize {
        self.folders.iter().map(Folder::unread_count).sum()
    }

    /// Folders matching the stored search filter. See
    /// [`Self::folders_matching`].
    pub fn filtered_folders(&self) -> Vec<&Folder> {
        self.folders_matching(&self.search_text)
    }

    /// Folders whose name, or any contained note's title or content,
    /// contains `search` case-insensitively.
    ///
    /// Empty search returns all folders. Matching folders are returned whole,
    /// with all their notes: filtering is at folder granularity.
    pub fn folders_matching(&self, search: &str) -> Vec<&Folder> {
        if search.is_empty() {
            return self.folders.iter().collect();
        }

        let needle = search.to_lowercase();
        self.folders
            .iter()
            .filter(|folder| {
                folder.name.to_lowercase().contains(&needle)
                    || folder.notes.iter().any(|note| {
                        note.title.to_lowercase().contains(&needle)
                            || note.content.to_lowercase().contains(&needle)
                    })
            })
            .collect()
    }

    fn folder(&self, folder_id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == folder_id)
    }

    fn folder_mut(&mut self, folder_id: FolderId) -> StoreResult<&mut Folder> {
        self.folders
            .iter_mut()
            .find(|folder| folder.id == folder_id)
            .ok_or(StoreError::FolderNotFound(folder_id))
    }
}
