//! Archive creation reporting.

use std::time::Duration;

/// Outcome of a successful archive creation.
///
/// # Examples
///
/// ```
/// use tarsafe_core::creation::CreationReport;
///
/// let mut report = CreationReport::default();
/// report.files_added = 10;
/// report.content_bytes = 4096;
/// report.archive_bytes = 1024;
///
/// assert_eq!(report.compression_ratio(), 4.0);
/// assert_eq!(report.total_items(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreationReport {
    /// Regular files written to the archive.
    pub files_added: usize,

    /// Directory entries written to the archive.
    pub directories_added: usize,

    /// Walked paths dropped by an exclusion substring.
    pub entries_excluded: usize,

    /// Symlinks and special files that were not archived.
    pub entries_skipped: usize,

    /// File content bytes read from the source.
    pub content_bytes: u64,

    /// Size of the archive file on disk, after compression.
    pub archive_bytes: u64,

    /// Wall-clock time of the whole call.
    pub duration: Duration,

    /// One message per skipped entry.
    pub warnings: Vec<String>,
}

impl CreationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns content bytes divided by archive bytes.
    ///
    /// Tar framing makes this lower than 1.0 for small uncompressed
    /// archives. Returns 0.0 when either side is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.archive_bytes == 0 || self.content_bytes == 0 {
            return 0.0;
        }
        self.content_bytes as f64 / self.archive_bytes as f64
    }

    /// Returns the number of entries written (files and directories).
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.files_added + self.directories_added
    }
}
