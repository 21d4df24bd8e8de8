//! Extraction root type.

use crate::ArchiveError;
use crate::Result;
use crate::security::path::normalize;
use std::path::Path;
use std::path::PathBuf;

/// The directory an archive is extracted into.
///
/// Constructing a `DestDir` resolves the requested path against the current
/// working directory, removes `.` and `..` components lexically and creates
/// the directory (and any missing parents). Every entry written during
/// extraction is checked to stay under this path.
///
/// The path is not canonicalized: symlinks already present in the
/// destination are not resolved.
///
/// # Examples
///
/// ```no_run
/// use tarsafe_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/extraction/./out")?;
/// assert_eq!(dest.as_path(), std::path::Path::new("/tmp/extraction/out"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Resolves and creates the destination directory.
    ///
    /// An empty path means the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or
    /// if the directory cannot be created (for example because a regular
    /// file already occupies the path).
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute = if path.as_os_str().is_empty() {
            std::env::current_dir().map_err(ArchiveError::io_at("resolve current directory", "."))?
        } else {
            std::path::absolute(path).map_err(ArchiveError::io_at("resolve path", path))?
        };
        let resolved = normalize(&absolute);

        std::fs::create_dir_all(&resolved)
            .map_err(ArchiveError::io_at("create directory", &resolved))?;

        Ok(Self(resolved))
    }

    /// Returns the resolved destination path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dest_dir_existing() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("dest should be valid");
        assert!(dest.as_path().is_absolute());
        assert_eq!(dest.as_path(), temp.path());
    }

    #[test]
    fn test_dest_dir_creates_missing_parents() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let nested = temp.path().join("a").join("b").join("c");

        let dest = DestDir::new(&nested).expect("should create nested dirs");
        assert!(nested.is_dir());
        assert_eq!(dest.as_path(), nested);
    }

    #[test]
    fn test_dest_dir_normalizes_dot_components() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let messy = temp.path().join("sub").join(".").join("..").join("out");

        let dest = DestDir::new(&messy).expect("should create dest dir");
        assert_eq!(dest.as_path(), temp.path().join("out"));
        assert!(temp.path().join("out").is_dir());
    }

    #[test]
    fn test_dest_dir_rejects_regular_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "test").expect("failed to write file");

        let result = DestDir::new(&file_path);
        assert!(matches!(result, Err(ArchiveError::IoContext { .. })));
    }

    #[test]
    fn test_dest_dir_empty_is_current_dir() {
        let dest = DestDir::new("").expect("cwd should resolve");
        assert_eq!(
            dest.as_path(),
            normalize(&std::env::current_dir().unwrap())
        );
    }

    #[test]
    fn test_dest_dir_into_path_buf() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("should create");
        let path = dest.clone().into_path_buf();
        assert_eq!(path, dest.as_path());
    }
}
