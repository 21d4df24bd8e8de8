//! Error conversion utilities for CLI.
//!
//! Converts tarsafe-core's typed errors (thiserror) into contextual errors
//! (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use tarsafe_core::ArchiveError;

/// Converts `ArchiveError` into an anyhow error mentioning `archive`.
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    match err {
        ArchiveError::PathTraversal { entry, dest } => {
            anyhow!(
                "Security violation: archive '{}' contains entry '{}' that resolves outside '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                entry.display(),
                dest.display()
            )
        }
        ArchiveError::InvalidExtension { path } => {
            anyhow!(
                "Unsupported archive name: {}\n\
                 HINT: Archive paths must end in .tar or .tar.gz",
                path.display()
            )
        }
        ArchiveError::SourceNotFound { path } => {
            anyhow!(
                "Source path not found: {}\n\
                 HINT: Check the SOURCE argument; it must be an existing file or directory.",
                path.display()
            )
        }
        ArchiveError::InvalidArchive { source } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted, truncated, or not a tar stream.",
                archive.display(),
                source
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Converts the error side of a core result.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}
