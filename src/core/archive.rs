//! Archive snapshot decoding.
//!
//! Reads the member list of a `.tar`, `.tar.gz` or `.tgz` archive into the
//! ordered `(path, is_dir)` list the virtual filesystem is built from. Only
//! headers are read; file contents are skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;

use crate::config::{GZIP_TAR_EXTENSIONS, TAR_EXTENSIONS};
use crate::core::error::ArchiveError;
use crate::models::ArchiveEntry;

/// Compression applied around the tar stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    TarGz,
}

impl ArchiveFormat {
    /// Detect the format from the file name.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if GZIP_TAR_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            Some(Self::TarGz)
        } else if TAR_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            Some(Self::Tar)
        } else {
            None
        }
    }
}

/// Load the member list of the archive at `path`.
pub fn load_archive(path: &Path) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let format = ArchiveFormat::detect(path)
        .ok_or_else(|| ArchiveError::UnsupportedFormat(path.to_path_buf()))?;

    let file = File::open(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let entries = match format {
        ArchiveFormat::Tar => read_entries(reader)?,
        ArchiveFormat::TarGz => read_entries(GzDecoder::new(reader))?,
    };

    tracing::info!(
        archive = %path.display(),
        ?format,
        members = entries.len(),
        "loaded archive"
    );
    Ok(entries)
}

/// Read the member list from an uncompressed tar stream.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive = Archive::new(reader);
    let mut entries = Vec::new();

    for member in archive.entries()? {
        let member = member?;
        let is_dir = member.header().entry_type().is_dir();
        let path = member.path()?.to_string_lossy().into_owned();
        tracing::trace!(path = %path, is_dir, "archive member");
        entries.push(ArchiveEntry { path, is_dir });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tar::{Builder, EntryType, Header};

    use super::*;

    fn build_tar(members: &[(&str, bool)]) -> Vec<u8> {
        let mut builder = Builder::new(Vec::new());
        for (path, is_dir) in members {
            let mut header = Header::new_gnu();
            if *is_dir {
                header.set_entry_type(EntryType::Directory);
                header.set_mode(0o755);
                header.set_size(0);
                builder
                    .append_data(&mut header, path, std::io::empty())
                    .unwrap();
            } else {
                let body = b"content";
                header.set_entry_type(EntryType::Regular);
                header.set_mode(0o644);
                header.set_size(body.len() as u64);
                builder.append_data(&mut header, path, &body[..]).unwrap();
            }
        }
        builder.into_inner().unwrap()
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tarsh-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_read_entries_preserves_order_and_kind() {
        let bytes = build_tar(&[("a/", true), ("a/b/", true), ("a/fa.txt", false)]);
        let entries = read_entries(bytes.as_slice()).unwrap();

        let kinds: Vec<_> = entries.iter().map(|e| e.is_dir).collect();
        assert_eq!(kinds, vec![true, true, false]);
        assert_eq!(entries[2].path, "a/fa.txt");
        assert!(entries[0].path.trim_end_matches('/') == "a");
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ArchiveFormat::detect(Path::new("snap/a.tar")),
            Some(ArchiveFormat::Tar)
        );
        assert_eq!(
            ArchiveFormat::detect(Path::new("a.TAR.GZ")),
            Some(ArchiveFormat::TarGz)
        );
        assert_eq!(
            ArchiveFormat::detect(Path::new("a.tgz")),
            Some(ArchiveFormat::TarGz)
        );
        assert_eq!(ArchiveFormat::detect(Path::new("a.zip")), None);
    }

    #[test]
    fn test_load_plain_tar() {
        let path = temp_path("plain.tar");
        std::fs::write(&path, build_tar(&[("a/", true), ("a/x.txt", false)])).unwrap();

        let entries = load_archive(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ArchiveEntry::from(("a/x.txt", false)));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_gzip_tar() {
        let path = temp_path("packed.tgz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&build_tar(&[("a/", true), ("a/c/", true)]))
            .unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let entries = load_archive(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.is_dir));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let err = load_archive(Path::new("snapshot.zip")).unwrap_err();
        assert!(matches!(err, ArchiveError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_archive(&temp_path("missing.tar")).unwrap_err();
        assert!(matches!(err, ArchiveError::Io { .. }));
    }
}
