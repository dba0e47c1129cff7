use std::fmt;

// =============================================================================
// Entry Kind
// =============================================================================

/// Kind of a virtual filesystem entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Map an archive member's directory flag to a kind.
    pub fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Directory } else { Self::File }
    }

    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

// =============================================================================
// Archive Entry
// =============================================================================

/// One member of the archive snapshot, as handed to the index builder.
///
/// The path is already normalized (no leading `./`, no trailing `/`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub is_dir: bool,
}

impl ArchiveEntry {
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_is_dir(self.is_dir)
    }
}

impl From<(&str, bool)> for ArchiveEntry {
    fn from((path, is_dir): (&str, bool)) -> Self {
        Self {
            path: path.to_string(),
            is_dir,
        }
    }
}
