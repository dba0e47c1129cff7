use std::collections::HashMap;

use crate::config::SEPARATOR;
use crate::core::error::VfsError;
use crate::models::{ArchiveEntry, EntryKind};

/// Read-only virtual filesystem index.
///
/// A flat, order-preserving map from canonical path to [`EntryKind`], built
/// once from the archive member list and never mutated afterwards.
///
/// # Path Convention
///
/// - Separator is `/`
/// - No leading or trailing slashes: `"a"`, `"a/b"`, `"a/b/d.txt"`
/// - The root is an explicit directory entry (for example `"a"`)
/// - Every ancestor of an entry is itself a directory entry
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Entries in archive order
    entries: Vec<(String, EntryKind)>,
    /// Path -> position in `entries`
    positions: HashMap<String, usize>,
    /// Canonical path of the root directory
    root: String,
}

impl VirtualFs {
    /// Build the index from an ordered archive member list.
    ///
    /// Member names are normalized first (see [`normalize_entry_path`]).
    /// Missing intermediate directories are inserted ahead of their first
    /// descendant. A repeated path keeps its first position and takes the
    /// last kind.
    ///
    /// `root` selects the root directory; when `None`, the first top-level
    /// directory in archive order is used.
    pub fn from_entries<I, E>(entries: I, root: Option<&str>) -> Result<Self, VfsError>
    where
        I: IntoIterator<Item = E>,
        E: Into<ArchiveEntry>,
    {
        let mut fs = Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            root: String::new(),
        };

        for entry in entries {
            let entry = entry.into();
            let path = normalize_entry_path(&entry.path);
            if path.is_empty() {
                continue;
            }
            if !fs.ensure_parents(&path) {
                tracing::warn!(path = %path, "skipping entry blocked by a file ancestor");
                continue;
            }
            fs.insert(path, entry.kind());
        }

        fs.root = match root {
            Some(root) => {
                let root = normalize_entry_path(root);
                if !fs.is_directory(&root) {
                    return Err(VfsError::RootNotFound(root));
                }
                root
            }
            None => fs
                .entries
                .iter()
                .find(|(path, kind)| kind.is_directory() && !path.contains(SEPARATOR))
                .map(|(path, _)| path.clone())
                .ok_or(VfsError::NoRoot)?,
        };

        tracing::info!(entries = fs.entries.len(), root = %fs.root, "virtual filesystem ready");
        Ok(fs)
    }

    fn insert(&mut self, path: String, kind: EntryKind) {
        if let Some(&pos) = self.positions.get(&path) {
            tracing::debug!(path = %path, %kind, "duplicate archive member");
            self.entries[pos].1 = kind;
            return;
        }
        self.positions.insert(path.clone(), self.entries.len());
        self.entries.push((path, kind));
    }

    /// Make sure every ancestor of `path` exists as a directory.
    ///
    /// Returns `false` if an ancestor is already a file.
    fn ensure_parents(&mut self, path: &str) -> bool {
        let mut end = 0;
        while let Some(offset) = path[end..].find(SEPARATOR) {
            end += offset;
            let ancestor = &path[..end];
            match self.lookup(ancestor) {
                Some(EntryKind::Directory) => {}
                Some(EntryKind::File) => return false,
                None => {
                    tracing::warn!(
                        path = %ancestor,
                        "archive omits intermediate directory, inserting it"
                    );
                    self.insert(ancestor.to_string(), EntryKind::Directory);
                }
            }
            end += SEPARATOR.len_utf8();
        }
        true
    }

    /// Canonical path of the root directory.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Get the kind of the entry at a canonical path.
    pub fn lookup(&self, path: &str) -> Option<EntryKind> {
        self.positions.get(path).map(|&pos| self.entries[pos].1)
    }

    /// Check if a path is an existing directory.
    pub fn is_directory(&self, path: &str) -> bool {
        matches!(self.lookup(path), Some(EntryKind::Directory))
    }

    /// Check if a canonical path is the root or lies below it.
    pub fn is_within_root(&self, path: &str) -> bool {
        path.strip_prefix(self.root.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
    }

    /// Iterate over all entries in archive order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EntryKind)> + '_ {
        self.entries
            .iter()
            .map(|(path, kind)| (path.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List the names of a directory's immediate children in index order.
    ///
    /// Returns `None` if `path` is not an existing directory.
    pub fn list_dir(&self, path: &str) -> Option<Vec<&str>> {
        if !self.is_directory(path) {
            return None;
        }

        let prefix = format!("{}{}", path, SEPARATOR);
        let names = self
            .entries
            .iter()
            .filter_map(|(entry, _)| entry.strip_prefix(prefix.as_str()))
            .map(|rest| rest.trim_end_matches(SEPARATOR))
            .filter(|rest| !rest.is_empty() && !rest.contains(SEPARATOR))
            .collect();
        Some(names)
    }
}

/// Normalize an archive member name into a canonical path.
///
/// Backslashes become `/`, and empty and `.` segments are dropped, which also
/// removes leading `./` and trailing separators. The bare `.` member
/// normalizes to the empty string.
pub fn normalize_entry_path(name: &str) -> String {
    name.replace('\\', "/")
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Index shaped like the sample snapshot the shell ships with.
    pub(crate) fn create_test_fs() -> VirtualFs {
        VirtualFs::from_entries(
            [
                ("a", true),
                ("a/b", true),
                ("a/b/d", true),
                ("a/b/d/d.txt", false),
                ("a/b/e.txt", false),
                ("a/c", true),
                ("a/c/h", true),
                ("a/c/g.txt", false),
                ("a/fa.txt", false),
                ("a/empty", true),
            ],
            None,
        )
        .expect("fixture should build")
    }

    #[test]
    fn test_from_entries_picks_first_top_level_dir() {
        let fs = create_test_fs();
        assert_eq!(fs.root(), "a");
        assert_eq!(fs.len(), 10);
    }

    #[test]
    fn test_explicit_root() {
        let fs = VirtualFs::from_entries([("a", true), ("a/b", true)], Some("a/b/")).unwrap();
        assert_eq!(fs.root(), "a/b");
    }

    #[test]
    fn test_missing_root() {
        let err = VirtualFs::from_entries([("a", true)], Some("z")).unwrap_err();
        assert_eq!(err, VfsError::RootNotFound("z".to_string()));

        let err = VirtualFs::from_entries([("readme.txt", false)], None).unwrap_err();
        assert_eq!(err, VfsError::NoRoot);
    }

    #[test]
    fn test_lookup() {
        let fs = create_test_fs();
        assert_eq!(fs.lookup("a"), Some(EntryKind::Directory));
        assert_eq!(fs.lookup("a/fa.txt"), Some(EntryKind::File));
        assert_eq!(fs.lookup("a/missing"), None);
        assert_eq!(fs.lookup("a/"), None);
    }

    #[test]
    fn test_is_directory() {
        let fs = create_test_fs();
        assert!(fs.is_directory("a"));
        assert!(fs.is_directory("a/b/d"));
        assert!(!fs.is_directory("a/fa.txt"));
        assert!(!fs.is_directory("nonexistent"));
    }

    #[test]
    fn test_iter_preserves_order() {
        let fs = create_test_fs();
        let paths: Vec<_> = fs.iter().map(|(path, _)| path).collect();
        assert_eq!(paths[0], "a");
        assert_eq!(paths[3], "a/b/d/d.txt");
        assert_eq!(paths.last(), Some(&"a/empty"));

        // Restartable
        assert_eq!(fs.iter().count(), fs.iter().count());
    }

    #[test]
    fn test_normalizes_archive_names() {
        let fs = VirtualFs::from_entries(
            [("./a/", true), ("./a/b/", true), ("a\\b\\x.txt", false), (".", true)],
            None,
        )
        .unwrap();
        let paths: Vec<_> = fs.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["a", "a/b", "a/b/x.txt"]);
    }

    #[test]
    fn test_inserts_missing_intermediate_directories() {
        let fs = VirtualFs::from_entries([("a", true), ("a/x/y/z.txt", false)], None).unwrap();
        let paths: Vec<_> = fs.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["a", "a/x", "a/x/y", "a/x/y/z.txt"]);
        assert!(fs.is_directory("a/x/y"));
    }

    #[test]
    fn test_duplicate_keeps_position_and_last_kind() {
        let fs = VirtualFs::from_entries(
            [("a", true), ("a/n", false), ("a/m", false), ("a/n", true)],
            None,
        )
        .unwrap();
        let paths: Vec<_> = fs.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["a", "a/n", "a/m"]);
        assert!(fs.is_directory("a/n"));
    }

    #[test]
    fn test_entry_under_file_is_skipped() {
        let fs =
            VirtualFs::from_entries([("a", true), ("a/f", false), ("a/f/x", false)], None).unwrap();
        assert_eq!(fs.lookup("a/f/x"), None);
        assert_eq!(fs.len(), 2);
    }

    #[test]
    fn test_list_dir_direct_children_only() {
        let fs = create_test_fs();
        let names = fs.list_dir("a").expect("root is a directory");
        assert_eq!(names, vec!["b", "c", "fa.txt", "empty"]);

        let names = fs.list_dir("a/b").unwrap();
        assert_eq!(names, vec!["d", "e.txt"]);
    }

    #[test]
    fn test_list_dir_does_not_match_sibling_prefixes() {
        let fs = VirtualFs::from_entries(
            [("a", true), ("a/b", true), ("a/bc", true), ("a/bc/x", false)],
            None,
        )
        .unwrap();
        assert!(fs.list_dir("a/b").unwrap().is_empty());
    }

    #[test]
    fn test_list_dir_on_file_or_missing() {
        let fs = create_test_fs();
        assert!(fs.list_dir("a/fa.txt").is_none());
        assert!(fs.list_dir("a/nope").is_none());
    }

    #[test]
    fn test_list_dir_empty() {
        let fs = create_test_fs();
        assert_eq!(fs.list_dir("a/empty"), Some(vec![]));
    }

    #[test]
    fn test_is_within_root() {
        let fs = VirtualFs::from_entries(
            [("x", true), ("x/a", true), ("x/ab", true), ("x/a/b", true)],
            Some("x/a"),
        )
        .unwrap();
        assert!(fs.is_within_root("x/a"));
        assert!(fs.is_within_root("x/a/b"));
        assert!(!fs.is_within_root("x"));
        assert!(!fs.is_within_root("x/ab"));
    }

    #[test]
    fn test_normalize_entry_path() {
        assert_eq!(normalize_entry_path("./a/b/"), "a/b");
        assert_eq!(normalize_entry_path("a//b"), "a/b");
        assert_eq!(normalize_entry_path("/a"), "a");
        assert_eq!(normalize_entry_path("."), "");
        assert_eq!(normalize_entry_path("a\\b"), "a/b");
    }
}
