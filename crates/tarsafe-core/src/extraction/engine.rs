//! Tar decoding loop for extraction.
//!
//! Headers are read one at a time. Every entry name is resolved against the
//! destination and checked by the traversal guard before its kind is even
//! looked at, so no entry of any type can point outside the destination.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::ArchiveReader;
use crate::io::ProgressTracker;
use crate::security::path::resolve_entry_path;
use crate::types::DestDir;
use crate::types::EntryKind;

const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Extracts every entry of `archive` under `dest`.
///
/// The first failing entry aborts the call. Entries already written stay
/// on disk.
pub(crate) fn extract_tar_archive(
    archive: &Path,
    dest: &DestDir,
    format: ArchiveFormat,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let mut report = ExtractionReport::new();

    let file = File::open(archive).map_err(ArchiveError::io_at("open archive", archive))?;
    let reader = ArchiveReader::new(BufReader::new(file), format);
    let mut tar = tar::Archive::new(reader);
    let mut tracker = ProgressTracker::new(progress, 0);

    let entries = tar.entries().map_err(invalid_archive)?;
    for entry in entries {
        let mut entry = entry.map_err(invalid_archive)?;
        let name = entry.path().map_err(invalid_archive)?.into_owned();
        let target = resolve_entry_path(dest, &name)?;

        let header = entry.header();
        let kind = EntryKind::from_tar(header.entry_type());
        let mode = if config.preserve_permissions {
            Some(header.mode().map_err(invalid_archive)? & 0o7777)
        } else {
            None
        };

        tracker.on_entry_start(&name);
        match kind {
            EntryKind::Directory => {
                debug!(entry = %name.display(), "creating directory");
                create_directory(&target, mode)?;
                report.directories_created += 1;
            }
            EntryKind::File => {
                debug!(entry = %name.display(), "extracting file");
                let mut reader = tracker.reader(&mut entry);
                report.bytes_written += write_file(&mut reader, &target, mode)?;
                report.files_extracted += 1;
            }
            EntryKind::Other(entry_type) => {
                warn!(entry = %name.display(), ?entry_type, "skipping unsupported entry");
                report.record_skip(format!(
                    "skipped '{}': unsupported entry type {entry_type:?}",
                    name.display()
                ));
            }
        }
        tracker.on_entry_complete(&name);
    }

    report.duration = start.elapsed();
    tracker.on_complete();

    info!(
        archive = %archive.display(),
        dest = %dest.as_path().display(),
        files = report.files_extracted,
        directories = report.directories_created,
        skipped = report.entries_skipped,
        "archive extracted"
    );

    Ok(report)
}

fn invalid_archive(source: io::Error) -> ArchiveError {
    ArchiveError::InvalidArchive { source }
}

/// Creates `target` and its parents. An existing directory is left as is.
fn create_directory(target: &Path, mode: Option<u32>) -> Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(target)
        .map_err(ArchiveError::io_at("create directory", target))
}

/// Creates or truncates `target` and copies `reader` into it.
///
/// The recorded mode applies when the file is newly created, subject to
/// the process umask.
fn write_file<R: Read>(reader: &mut R, target: &Path, mode: Option<u32>) -> Result<u64> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(ArchiveError::io_at("create directory", parent))?;
    }

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let file = options
        .open(target)
        .map_err(ArchiveError::io_at("create file", target))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
    let written = io::copy(reader, &mut writer).map_err(ArchiveError::io_at("write file", target))?;
    writer
        .flush()
        .map_err(ArchiveError::io_at("write file", target))?;

    Ok(written)
}
