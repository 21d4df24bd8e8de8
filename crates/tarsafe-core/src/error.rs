//! Error types for archive creation and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while creating or extracting an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O operation on a known path failed.
    #[error("failed to {operation} '{}': {source}", .path.display())]
    IoContext {
        /// Operation that was being performed (e.g. "create directory").
        operation: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Source path to archive does not exist.
    #[error("source path not found: {}", .path.display())]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Archive path does not end in `.tar` or `.tar.gz`.
    #[error("invalid archive extension for '{}': expected .tar or .tar.gz", .path.display())]
    InvalidExtension {
        /// The offending archive path.
        path: PathBuf,
    },

    /// Archive stream could not be decoded.
    #[error("invalid archive: {source}")]
    InvalidArchive {
        /// Decoder error.
        #[source]
        source: std::io::Error,
    },

    /// Entry would be written outside the destination directory.
    #[error("path traversal detected: entry '{}' escapes {}", .entry.display(), .dest.display())]
    PathTraversal {
        /// Entry name as recorded in the archive.
        entry: PathBuf,
        /// Destination directory the entry tried to leave.
        dest: PathBuf,
    },

    /// Builder or configuration is incomplete or inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Reason the configuration was rejected.
        reason: String,
    },
}

impl ArchiveError {
    /// Wraps an I/O error with the operation and path it occurred on.
    pub(crate) fn io_at(
        operation: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::IoContext {
            operation,
            path,
            source,
        }
    }

    /// Returns `true` if this error represents a security violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tarsafe_core::ArchiveError;
    ///
    /// let err = ArchiveError::PathTraversal {
    ///     entry: PathBuf::from("../etc/passwd"),
    ///     dest: PathBuf::from("/tmp/out"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ArchiveError::SourceNotFound {
    ///     path: PathBuf::from("missing"),
    /// };
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns `true` if the call was rejected before touching the filesystem.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::InvalidExtension { .. }
                | Self::InvalidConfiguration { .. }
        )
    }
}
