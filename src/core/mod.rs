//! Core business logic for the shell.
//!
//! This module provides:
//! - [`VirtualFs`] read-only index built from the archive snapshot
//! - [`resolve`] path resolution and [`NavigationState`]
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`GlobPattern`] matching for `find`

pub mod archive;
pub mod calendar;
mod commands;
pub mod error;
pub(crate) mod filesystem;
pub mod glob;
mod navigation;
pub mod parser;
pub mod resolve;

pub use commands::{Command, CommandResult, PathArg, ShellContext, execute_command, find, list};
pub use filesystem::{VirtualFs, normalize_entry_path};
pub use glob::GlobPattern;
pub use navigation::NavigationState;
pub use parser::parse_input;
pub use resolve::resolve;
