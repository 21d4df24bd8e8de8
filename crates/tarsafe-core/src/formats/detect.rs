//! Archive format detection.

use std::fmt;
use std::path::Path;

use crate::ArchiveError;
use crate::Result;

const SUFFIX_TAR: &str = ".tar";
const SUFFIX_TAR_GZ: &str = ".tar.gz";

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
}

impl ArchiveFormat {
    /// Returns `true` if the tar stream is wrapped in gzip.
    #[must_use]
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::TarGz)
    }

    /// Returns the file suffix for this format, including the leading dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarsafe_core::formats::ArchiveFormat;
    ///
    /// assert_eq!(ArchiveFormat::Tar.suffix(), ".tar");
    /// assert_eq!(ArchiveFormat::TarGz.suffix(), ".tar.gz");
    /// ```
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Tar => SUFFIX_TAR,
            Self::TarGz => SUFFIX_TAR_GZ,
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tar => f.write_str("tar"),
            Self::TarGz => f.write_str("tar.gz"),
        }
    }
}

/// Detects the archive format from the suffix of a file path.
///
/// Only the name is inspected, never the file content. Matching is
/// case-sensitive.
///
/// # Errors
///
/// Returns `ArchiveError::InvalidExtension` if the path ends in neither
/// `.tar` nor `.tar.gz`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tarsafe_core::formats::ArchiveFormat;
/// use tarsafe_core::formats::detect_format;
///
/// assert_eq!(detect_format(Path::new("backup.tar.gz"))?, ArchiveFormat::TarGz);
/// assert!(detect_format(Path::new("backup.zip")).is_err());
/// # Ok::<(), tarsafe_core::ArchiveError>(())
/// ```
pub fn detect_format(path: &Path) -> Result<ArchiveFormat> {
    let invalid = || ArchiveError::InvalidExtension {
        path: path.to_path_buf(),
    };

    let name = path.file_name().ok_or_else(invalid)?.to_string_lossy();

    if name.ends_with(SUFFIX_TAR_GZ) {
        Ok(ArchiveFormat::TarGz)
    } else if name.ends_with(SUFFIX_TAR) {
        Ok(ArchiveFormat::Tar)
    } else {
        Err(invalid())
    }
}
