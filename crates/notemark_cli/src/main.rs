//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notemark_core` linkage.
//! - Keep output shape deterministic for quick local sanity checks.

use notemark_core::model::samples::sample_folders;
use notemark_core::{render, NoteStore};

fn main() {
    println!("notemark_core version={}", notemark_core::core_version());

    let store = NoteStore::from_folders(sample_folders());
    println!("folders={} unread={}", store.folders().len(), store.total_unread_count());
    for folder in store.folders() {
        println!("folder name={} notes={} unread={}", folder.name, folder.notes.len(), folder.unread_count());
    }

    let styled = render("# Hello\nThis is **bold** and `code`.");
    println!("render runs={}", styled.runs().len());
}
