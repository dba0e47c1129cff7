//! A minimal shell over a read-only virtual filesystem.
//!
//! The filesystem is a flat index materialized from a tar archive at
//! startup. Commands (`ls`, `cd`, `find`, `cal`, `whoami`, `exit`) are pure
//! functions of the current directory and their input and return display
//! text.

pub mod app;
pub mod config;
pub mod core;
pub mod models;

pub use app::Shell;
pub use config::Config;
