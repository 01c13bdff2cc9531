//! Deterministic sample data for smoke checks and demos.

use crate::model::folder::{Folder, FolderColor};
use crate::model::note::Note;

/// Sample folders with a few notes each, for the smoke CLI and local demos.
///
/// IDs and timestamps are freshly generated on each call; names and contents
/// are fixed.
pub fn sample_folders() -> Vec<Folder> {
    let mut personal = Folder::new("Personal", "person.fill", FolderColor::Blue);
    personal
        .notes
        .push(Note::new("Shopping List", "1. Groceries\n2. Household items"));

    let mut work = Folder::new("Work", "briefcase.fill", FolderColor::Purple);
    work.notes
        .push(Note::new("Project Ideas", "New app concepts to explore..."));

    let mut ideas = Folder::new("Ideas", "lightbulb.fill", FolderColor::Green);
    ideas
        .notes
        .push(Note::new("Meeting Notes", "Discussion points from team meeting..."));

    vec![personal, work, ideas]
}
