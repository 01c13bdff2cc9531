//! Core domain logic for notemark.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod markdown;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use markdown::styled::{HighlightColor, RunStyle, StyledText, TextRun};
pub use markdown::{convert, highlight, render};
pub use model::folder::{Folder, FolderColor, FolderId};
pub use model::note::{Note, NoteId};
pub use store::snapshot::StoreSnapshot;
pub use store::{NoteStore, StoreError, StoreEvent, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
