//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its lifecycle helpers.
//! - Derive display projections (content preview, relative modified time).
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `modified_at >= created_at` at all times.
//! - `is_unread` starts `true` and is cleared only by an explicit mark-read,
//!   which also refreshes `modified_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

const PREVIEW_LINE_COUNT: usize = 2;

/// A single Markdown-subset note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID.
    pub id: NoteId,
    /// Display title. Store operations reject blank titles; the entity
    /// itself does not.
    pub title: String,
    /// Markdown-subset source text. May be empty.
    pub content: String,
    /// Set once at construction.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every title/content mutation and on mark-read.
    pub modified_at: DateTime<Utc>,
    /// Needs-attention flag, `true` at creation.
    pub is_unread: bool,
}

impl Note {
    /// Creates a new unread note with a generated ID and current timestamps.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: now,
            modified_at: now,
            is_unread: true,
        }
    }

    /// Refreshes the modification timestamp.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Clears the unread flag and refreshes `modified_at`.
    ///
    /// Idempotent on the flag; every call still bumps the timestamp.
    pub fn mark_read(&mut self) {
        self.is_unread = false;
        self.touch();
    }

    /// Plain-text preview: the first two content lines, `...`-suffixed when
    /// the content continues past them.
    pub fn content_preview(&self) -> String {
        let preview = self
            .content
            .split('\n')
            .take(PREVIEW_LINE_COUNT)
            .collect::<Vec<_>>()
            .join("\n");
        if preview.len() < self.content.len() {
            format!("{preview}...")
        } else {
            preview
        }
    }

    /// Human-relative description of how long ago the note was modified,
    /// e.g. "3 minutes ago".
    pub fn time_ago_modified(&self) -> String {
        let elapsed = Utc::now().signed_duration_since(self.modified_at);
        timeago::Formatter::new().convert(elapsed.to_std().unwrap_or_default())
    }
}
