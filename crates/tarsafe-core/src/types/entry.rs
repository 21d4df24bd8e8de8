//! Archive entry records.

use std::fs::Metadata;
use std::path::PathBuf;

/// Kind of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file with content.
    File,
    /// Directory, no content.
    Directory,
    /// Any other tar entry type. Never written, skipped on extraction.
    Other(tar::EntryType),
}

impl EntryKind {
    /// Maps a tar header type flag to an entry kind.
    ///
    /// Old-style regular files (`\0` type flag) and contiguous files are
    /// treated as regular files.
    #[must_use]
    pub fn from_tar(entry_type: tar::EntryType) -> Self {
        if entry_type.is_file() || entry_type.is_contiguous() {
            Self::File
        } else if entry_type.is_dir() {
            Self::Directory
        } else {
            Self::Other(entry_type)
        }
    }

    /// Returns the tar header type flag for this kind.
    #[must_use]
    pub const fn to_tar(self) -> tar::EntryType {
        match self {
            Self::File => tar::EntryType::Regular,
            Self::Directory => tar::EntryType::Directory,
            Self::Other(entry_type) => entry_type,
        }
    }
}

/// One file or directory record, as walked from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Filesystem path the entry is read from.
    pub source: PathBuf,
    /// Name recorded in the archive: relative, normal components only.
    pub name: PathBuf,
    /// File or directory.
    pub kind: EntryKind,
    /// Permission bits (`0o7777` mask).
    pub mode: u32,
    /// Content length in bytes. Always `0` for directories.
    pub size: u64,
    /// Modification time in seconds since the Unix epoch.
    pub mtime: u64,
}

impl ArchiveEntry {
    /// Builds an entry from filesystem metadata.
    #[must_use]
    pub fn from_metadata(source: PathBuf, name: PathBuf, kind: EntryKind, metadata: &Metadata) -> Self {
        let size = match kind {
            EntryKind::File => metadata.len(),
            EntryKind::Directory | EntryKind::Other(_) => 0,
        };
        Self {
            source,
            name,
            kind,
            mode: mode_of(metadata, kind),
            size,
            mtime: mtime_of(metadata),
        }
    }
}

#[cfg(unix)]
fn mode_of(metadata: &Metadata, _kind: EntryKind) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_of(metadata: &Metadata, kind: EntryKind) -> u32 {
    match (kind, metadata.permissions().readonly()) {
        (EntryKind::Directory, true) => 0o555,
        (EntryKind::Directory, false) => 0o755,
        (_, true) => 0o444,
        (_, false) => 0o644,
    }
}

fn mtime_of(metadata: &Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_from_tar() {
        assert_eq!(EntryKind::from_tar(tar::EntryType::Regular), EntryKind::File);
        assert_eq!(EntryKind::from_tar(tar::EntryType::Directory), EntryKind::Directory);
        assert_eq!(
            EntryKind::from_tar(tar::EntryType::Symlink),
            EntryKind::Other(tar::EntryType::Symlink)
        );
        assert_eq!(
            EntryKind::from_tar(tar::EntryType::Link),
            EntryKind::Other(tar::EntryType::Link)
        );
    }

    #[test]
    fn test_kind_to_tar() {
        assert_eq!(EntryKind::File.to_tar(), tar::EntryType::Regular);
        assert_eq!(EntryKind::Directory.to_tar(), tar::EntryType::Directory);
    }

    #[test]
    fn test_from_metadata_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "hello").unwrap();

        let metadata = fs::metadata(&path).unwrap();
        let entry = ArchiveEntry::from_metadata(path.clone(), "a.txt".into(), EntryKind::File, &metadata);
        assert_eq!(entry.size, 5);
        assert_eq!(entry.name, std::path::Path::new("a.txt"));
        assert!(entry.mtime > 0);
    }

    #[test]
    fn test_from_metadata_directory_has_no_size() {
        let temp = TempDir::new().unwrap();
        let metadata = fs::metadata(temp.path()).unwrap();
        let entry = ArchiveEntry::from_metadata(
            temp.path().to_path_buf(),
            "dir".into(),
            EntryKind::Directory,
            &metadata,
        );
        assert_eq!(entry.size, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_from_metadata_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("script.sh");
        fs::write(&path, "#!/bin/sh").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o750)).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        let entry = ArchiveEntry::from_metadata(path, "script.sh".into(), EntryKind::File, &metadata);
        assert_eq!(entry.mode, 0o750);
    }
}
