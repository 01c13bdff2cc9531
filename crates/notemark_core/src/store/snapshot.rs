//! Serializable snapshot of the store's state.
//!
//! # Responsibility
//! - Capture folders and selection in a serde-friendly value so callers can
//!   persist and restore sessions in a format of their choosing.
//!
//! # Invariants
//! - A snapshot round-trip reconstructs every note and folder field,
//!   including IDs, timestamps and unread flags.
//! - Observers and the transient search filter are not part of a snapshot.

use crate::model::folder::{Folder, FolderId};
use crate::store::NoteStore;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub folders: Vec<Folder>,
    pub selected_folder_id: Option<FolderId>,
}

impl NoteStore {
    /// Copies the current state into a serializable snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            folders: self.folders.clone(),
            selected_folder_id: self.selected_folder_id,
        }
    }

    /// Rebuilds a store from a previously captured snapshot.
    ///
    /// A selection pointing at a folder missing from the snapshot is dropped.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let StoreSnapshot {
            folders,
            selected_folder_id,
        } = snapshot;
        let selected_folder_id = selected_folder_id
            .filter(|id| folders.iter().any(|folder| folder.id == *id));
        Self {
            folders,
            selected_folder_id,
            ..Self::default()
        }
    }
}
