//! Progress tracking helpers built on [`ProgressCallback`].
//!
//! - **`ProgressTracker`**: numbers entries and forwards lifecycle events.
//! - **`ProgressReader`**: reports bytes flowing through a reader in batches.

use crate::ProgressCallback;
use std::io::Read;
use std::path::Path;

/// Batch size for byte progress updates.
const DEFAULT_BATCH_THRESHOLD: u64 = 1024 * 1024;

/// Manages progress callbacks with automatic entry counting.
///
/// `total_entries` is `0` when the total is not known up front, which is
/// the case for extraction since tar streams carry no index.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tarsafe_core::NoopProgress;
/// use tarsafe_core::io::ProgressTracker;
///
/// let mut progress = NoopProgress;
/// let mut tracker = ProgressTracker::new(&mut progress, 2);
///
/// tracker.on_entry_start(Path::new("a.txt"));
/// tracker.on_entry_complete(Path::new("a.txt"));
/// assert_eq!(tracker.current_entry(), 1);
/// ```
pub struct ProgressTracker<'a> {
    progress: &'a mut dyn ProgressCallback,
    current_entry: usize,
    total_entries: usize,
}

impl<'a> ProgressTracker<'a> {
    /// Creates a new progress tracker.
    #[must_use]
    pub fn new(progress: &'a mut dyn ProgressCallback, total_entries: usize) -> Self {
        Self {
            progress,
            current_entry: 0,
            total_entries,
        }
    }

    /// Increments the entry counter and reports the start of an entry.
    pub fn on_entry_start(&mut self, path: &Path) {
        self.current_entry += 1;
        self.progress
            .on_entry_start(path, self.total_entries, self.current_entry);
    }

    /// Reports that an entry was fully processed.
    pub fn on_entry_complete(&mut self, path: &Path) {
        self.progress.on_entry_complete(path);
    }

    /// Reports that the whole operation finished.
    pub fn on_complete(&mut self) {
        self.progress.on_complete();
    }

    /// Returns the number of entries started so far.
    #[must_use]
    pub fn current_entry(&self) -> usize {
        self.current_entry
    }

    /// Wraps `inner` so bytes read through it are reported to the callback.
    pub fn reader<R: Read>(&mut self, inner: R) -> ProgressReader<'_, R> {
        ProgressReader::new(inner, &mut *self.progress)
    }
}

/// Wrapper reader that reports bytes read to a progress callback.
///
/// Updates are batched: the callback fires once the accumulated count
/// reaches the threshold, and once more on drop for the remainder.
pub struct ProgressReader<'a, R> {
    inner: R,
    progress: &'a mut dyn ProgressCallback,
    bytes_since_last_update: u64,
    batch_threshold: u64,
}

impl<'a, R> ProgressReader<'a, R> {
    /// Creates a progress reader with the default 1 MB batch threshold.
    #[must_use]
    pub fn new(inner: R, progress: &'a mut dyn ProgressCallback) -> Self {
        Self::with_batch_threshold(inner, progress, DEFAULT_BATCH_THRESHOLD)
    }

    /// Creates a progress reader with a custom batch threshold.
    #[must_use]
    pub fn with_batch_threshold(
        inner: R,
        progress: &'a mut dyn ProgressCallback,
        batch_threshold: u64,
    ) -> Self {
        Self {
            inner,
            progress,
            bytes_since_last_update: 0,
            batch_threshold,
        }
    }

    fn flush_progress(&mut self) {
        if self.bytes_since_last_update > 0 {
            self.progress.on_bytes_written(self.bytes_since_last_update);
            self.bytes_since_last_update = 0;
        }
    }
}

impl<R: Read> Read for ProgressReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let bytes_read = self.inner.read(buf)?;
        if bytes_read > 0 {
            self.bytes_since_last_update += bytes_read as u64;
            if self.bytes_since_last_update >= self.batch_threshold {
                self.flush_progress();
            }
        }
        Ok(bytes_read)
    }
}

impl<R> Drop for ProgressReader<'_, R> {
    fn drop(&mut self) {
        self.flush_progress();
    }
}
