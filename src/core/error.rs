//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ShellError`] - Command failures, rendered verbatim to the terminal
//! - [`ResolveError`] - Path resolution failures
//! - [`VfsError`] - Virtual filesystem construction errors
//! - [`ArchiveError`] - Archive decoding errors
//! - [`ConfigError`] - Configuration loading errors
//! - [`StartupError`] - Anything that stops the shell from starting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`ShellError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Path does not resolve to an existing entry of the required kind
    NotFound,
    /// Command requires an argument that was not supplied
    MissingArgument,
    /// Search pattern matched nothing
    NoMatch,
    /// Unrecognized verb
    UnknownCommand,
    /// Argument present but unusable
    InvalidArgument,
}

/// Command-level errors.
///
/// The `Display` output is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("ls: cannot access '{0}': No such file or directory")]
    CannotAccess(String),

    #[error("cd: no such file or directory: {0}")]
    NoSuchDirectory(String),

    #[error("{0}: missing argument")]
    MissingArgument(&'static str),

    #[error("find: '{0}' not found")]
    NoMatch(String),

    #[error("{0}: command not found")]
    UnknownCommand(String),

    #[error("cal: invalid date: {0}")]
    InvalidDate(String),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CannotAccess(_) | Self::NoSuchDirectory(_) => ErrorKind::NotFound,
            Self::MissingArgument(_) => ErrorKind::MissingArgument,
            Self::NoMatch(_) => ErrorKind::NoMatch,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::InvalidDate(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Path resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// An intermediate segment of a `..` walk is not an existing directory.
    /// Carries the partially built path.
    #[error("no such directory: {0}")]
    MissingIntermediate(String),
}

impl ResolveError {
    /// The path reported to the user as the offending target.
    pub fn target(&self) -> &str {
        match self {
            Self::MissingIntermediate(path) => path,
        }
    }
}

/// Virtual filesystem construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// The archive has no top-level directory to act as root
    #[error("archive has no top-level directory to use as root")]
    NoRoot,
    /// The configured root is absent or not a directory
    #[error("root directory '{0}' not found in archive")]
    RootNotFound(String),
}

/// Archive decoding errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read archive {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed archive: {0}")]
    Malformed(#[from] io::Error),

    #[error("unsupported archive format: {0} (expected .tar, .tar.gz or .tgz)")]
    UnsupportedFormat(PathBuf),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// Errors raised while bringing a shell session up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Vfs(#[from] VfsError),
}
