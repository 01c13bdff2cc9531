//! Domain model for notes and folders.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep derived display values (unread counts, sort order, previews) as
//!   computed projections, never stored state.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Deletion is hard delete owned by the store; entities carry no tombstones.

pub mod folder;
pub mod note;
pub mod samples;
