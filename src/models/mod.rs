//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`EntryKind`], [`ArchiveEntry`] - Virtual filesystem representation
//! - [`OutputLine`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{ArchiveEntry, EntryKind};
pub use terminal::{OutputLine, OutputLineData};
