//! Folder domain model.
//!
//! # Responsibility
//! - Group notes under a named, decorated folder.
//! - Compute derived projections: unread count, display-sorted notes.
//!
//! # Invariants
//! - `notes` keeps insertion order; display order is computed, never stored.
//! - `unread_count` is recomputed on read, never cached.

use crate::model::note::{Note, NoteId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a folder.
pub type FolderId = Uuid;

/// Icon tint from the closed presentation palette.
///
/// Opaque to core logic; carried through for the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderColor {
    Red,
    Green,
    #[default]
    Blue,
    Purple,
}

/// A named collection of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Stable global ID.
    pub id: FolderId,
    /// Display name shown in the navigation list.
    pub name: String,
    /// Contained notes in insertion order.
    pub notes: Vec<Note>,
    /// Symbol name for the folder icon. Pass-through value.
    pub icon: String,
    /// Icon tint. Pass-through value.
    pub color: FolderColor,
}

impl Folder {
    /// Creates an empty folder with a generated ID.
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: FolderColor) -> Self {
        Self::with_id(Uuid::new_v4(), name, icon, color)
    }

    /// Creates a folder with a caller-provided stable ID.
    pub fn with_id(
        id: FolderId,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: FolderColor,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            notes: Vec::new(),
            icon: icon.into(),
            color,
        }
    }

    /// Number of unread notes. Recomputed on every call.
    pub fn unread_count(&self) -> usize {
        self.notes.iter().filter(|note| note.is_unread).count()
    }

    /// Notes ordered by `modified_at` descending.
    ///
    /// The sort is stable: ties keep their insertion order.
    pub fn sorted_notes(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        sorted
    }

    pub(crate) fn note(&self, note_id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == note_id)
    }

    pub(crate) fn note_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == note_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Folder, FolderColor};
    use crate::model::note::Note;

    #[test]
    fn unread_count_follows_note_flags() {
        let mut folder = Folder::new("Inbox", "folder.fill", FolderColor::Blue);
        folder.notes.push(Note::new("a", ""));
        folder.notes.push(Note::new("b", ""));
        assert_eq!(folder.unread_count(), 2);

        folder.notes[0].mark_read();
        assert_eq!(folder.unread_count(), 1);
    }

    #[test]
    fn sorted_notes_keeps_insertion_order_on_timestamp_ties() {
        let mut folder = Folder::new("Inbox", "folder.fill", FolderColor::Blue);
        let mut first = Note::new("first", "");
        let mut second = Note::new("second", "");
        let shared = first.created_at;
        first.modified_at = shared;
        second.created_at = shared;
        second.modified_at = shared;
        folder.notes.push(first);
        folder.notes.push(second);

        let sorted = folder.sorted_notes();
        assert_eq!(sorted[0].title, "first");
        assert_eq!(sorted[1].title, "second");
    }
}
