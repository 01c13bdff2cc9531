//! Markdown authoring and rendering pipeline.
//!
//! # Responsibility
//! - Render Markdown-subset source to styled text runs.
//! - Annotate raw source with syntax-highlight colors.
//! - Heuristically rewrite plain text as Markdown.
//!
//! # Invariants
//! - Every function here is pure and total: malformed input degrades to
//!   plain or partially-styled output, it never errors to the caller.

pub mod convert;
pub mod highlight;
pub mod render;
pub mod styled;

pub use convert::convert;
pub use highlight::highlight;
pub use render::render;
