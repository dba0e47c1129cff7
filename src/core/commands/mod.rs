//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against the filesystem
//!
//! # Architecture
//!
//! Commands are parsed from user input into the `Command` enum,
//! then executed via `execute_command`. Execution never mutates the
//! current directory; `cd` returns a navigation target that the session
//! applies.

mod execute;
mod result;

pub use execute::{ShellContext, execute_command, find, list};
pub use result::CommandResult;

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `ls bar`).
///
/// The path is stored as typed (not validated) since validation happens
/// during execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    /// Create a new path argument from a string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List a directory (current directory when absent)
    Ls(Option<PathArg>),
    /// Change directory; `None` is a usage error
    Cd(Option<PathArg>),
    /// Month calendar; empty args means the configured month
    Cal(Vec<String>),
    Whoami,
    /// Glob search; `None` dumps the whole index
    Find(Option<String>),
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse command from name and arguments.
    ///
    /// Extra arguments beyond the ones a command uses are ignored.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "ls" => Self::Ls(args.first().map(PathArg::new)),
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "cal" => Self::Cal(args.to_vec()),
            "whoami" => Self::Whoami,
            "find" => Self::Find(args.first().filter(|p| !p.is_empty()).cloned()),
            "exit" => Self::Exit,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(Command::parse("ls", &[]), Command::Ls(None));
        assert!(matches!(
            Command::parse("ls", &args(&["b/d"])),
            Command::Ls(Some(ref p)) if p == &"b/d"
        ));
    }

    #[test]
    fn test_parse_cd() {
        assert_eq!(Command::parse("cd", &[]), Command::Cd(None));
        assert!(matches!(
            Command::parse("cd", &args(&["..", "ignored"])),
            Command::Cd(Some(ref p)) if p == &".."
        ));
    }

    #[test]
    fn test_parse_find() {
        assert_eq!(Command::parse("find", &[]), Command::Find(None));
        assert_eq!(Command::parse("find", &args(&[""])), Command::Find(None));
        assert_eq!(
            Command::parse("find", &args(&["fa*"])),
            Command::Find(Some("fa*".to_string()))
        );
    }

    #[test]
    fn test_parse_static_commands() {
        assert_eq!(Command::parse("whoami", &[]), Command::Whoami);
        assert_eq!(Command::parse("exit", &[]), Command::Exit);
        assert_eq!(
            Command::parse("cal", &args(&["2", "2025"])),
            Command::Cal(args(&["2", "2025"]))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("foobar", &[]),
            Command::Unknown("foobar".to_string())
        );
        // Verbs are case-sensitive.
        assert_eq!(Command::parse("LS", &[]), Command::Unknown("LS".to_string()));
    }
}
