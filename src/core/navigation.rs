//! Current-directory state.

use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::core::resolve::resolve;

/// The shell's current directory.
///
/// Always names an existing directory at or below the root of the
/// filesystem it was created for. It only changes through
/// [`NavigationState::enter`], which leaves it untouched on failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current: String,
}

impl NavigationState {
    /// Start at the filesystem root.
    pub fn new(fs: &VirtualFs) -> Self {
        Self {
            current: fs.root().to_string(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move to an already-resolved canonical directory.
    pub fn enter(&mut self, fs: &VirtualFs, path: String) -> Result<(), ShellError> {
        if !fs.is_directory(&path) || !fs.is_within_root(&path) {
            return Err(ShellError::NoSuchDirectory(path));
        }
        tracing::debug!(from = %self.current, to = %path, "change directory");
        self.current = path;
        Ok(())
    }

    /// Resolve `token` to an existing directory without moving.
    pub fn resolve_directory(
        fs: &VirtualFs,
        current: &str,
        token: &str,
    ) -> Result<String, ShellError> {
        match resolve(fs, current, token) {
            Ok(path) if fs.is_directory(&path) => Ok(path),
            Ok(_) => Err(ShellError::NoSuchDirectory(token.to_string())),
            Err(err) => Err(ShellError::NoSuchDirectory(err.target().to_string())),
        }
    }
}
