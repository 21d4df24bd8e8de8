//! Extraction results and progress hooks.

use std::path::Path;
use std::time::Duration;

/// Outcome of a successful extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Regular files written.
    pub files_extracted: usize,

    /// Directory entries materialized.
    pub directories_created: usize,

    /// Entries of unsupported types that were not written.
    pub entries_skipped: usize,

    /// File content bytes written to disk.
    pub bytes_written: u64,

    /// Wall-clock time of the whole call.
    pub duration: Duration,

    /// One message per skipped entry.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a skipped entry together with the reason.
    pub fn record_skip(&mut self, message: String) {
        self.entries_skipped += 1;
        self.warnings.push(message);
    }

    /// Returns the number of entries written (files and directories).
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Receives progress updates while an archive is created or extracted.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tarsafe_core::ProgressCallback;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is processed.
    ///
    /// `current` is 1-based. `total` is `0` when the entry count is not
    /// known in advance (extraction).
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called as file content flows through, in batches.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after an entry has been fully written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the last entry.
    fn on_complete(&mut self);
}

/// Progress callback that ignores every update.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
