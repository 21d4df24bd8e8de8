//! Tar stream writer for archive creation.
//!
//! Entries are collected up front so progress totals are known, then
//! written through `tar::Builder` into the compression stage selected by
//! the output suffix.

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tar::Builder;
use tar::Header;
use tracing::debug;
use tracing::info;

use crate::ArchiveError;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;
use crate::creation::walker::collect_entries;
use crate::formats::ArchiveFormat;
use crate::formats::ArchiveWriter;
use crate::io::CountingWriter;
use crate::io::ProgressTracker;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;

/// Writes `source` into a new archive at `output`.
///
/// The caller has already validated the source and the output suffix.
/// Missing parent directories of `output` are created and an existing
/// file is truncated. On error the partially written file stays on disk.
pub(crate) fn create_tar_archive(
    source: &Path,
    output: &Path,
    format: ArchiveFormat,
    config: &CreationConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    let start = Instant::now();
    let mut report = CreationReport::default();

    let outcome = collect_entries(source, config, Some(output))?;
    report.entries_excluded = outcome.excluded;
    report.entries_skipped = outcome.skipped.len();
    report.warnings = outcome.skipped;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(ArchiveError::io_at("create directory", parent))?;
    }
    let file = File::create(output).map_err(ArchiveError::io_at("create file", output))?;

    let writer = ArchiveWriter::new(CountingWriter::new(file), format);
    let mut builder = Builder::new(writer);
    let mut tracker = ProgressTracker::new(progress, outcome.entries.len());

    for entry in &outcome.entries {
        let entry_path = entry.name.as_path();
        tracker.on_entry_start(entry_path);
        match entry.kind {
            EntryKind::Directory => {
                append_directory(&mut builder, entry)
                    .map_err(ArchiveError::io_at("write archive", output))?;
                report.directories_added += 1;
            }
            EntryKind::File => {
                report.content_bytes += append_file(&mut builder, entry, &mut tracker, output)?;
                report.files_added += 1;
            }
            EntryKind::Other(_) => {}
        }
        tracker.on_entry_complete(entry_path);
    }

    // Tar trailer, then gzip trailer and flush, then the file is closed.
    builder
        .finish()
        .map_err(ArchiveError::io_at("finalize archive", output))?;
    let writer = builder
        .into_inner()
        .map_err(ArchiveError::io_at("finalize archive", output))?;
    let counting = writer
        .finish()
        .map_err(ArchiveError::io_at("finalize archive", output))?;
    report.archive_bytes = counting.bytes_written();
    drop(counting.into_inner());

    report.duration = start.elapsed();
    tracker.on_complete();

    info!(
        archive = %output.display(),
        format = %format,
        files = report.files_added,
        directories = report.directories_added,
        bytes = report.archive_bytes,
        "archive created"
    );

    Ok(report)
}

fn append_directory<W: io::Write>(builder: &mut Builder<W>, entry: &ArchiveEntry) -> io::Result<()> {
    debug!(entry = %entry.name.display(), "adding directory");
    let mut header = entry_header(entry, 0);
    builder.append_data(&mut header, &entry.name, io::empty())
}

/// Appends one regular file and returns its content length.
fn append_file<W: io::Write>(
    builder: &mut Builder<W>,
    entry: &ArchiveEntry,
    tracker: &mut ProgressTracker<'_>,
    output: &Path,
) -> Result<u64> {
    let file = File::open(&entry.source).map_err(ArchiveError::io_at("open file", &entry.source))?;
    // Size is taken from the open handle so header and content agree.
    let size = file
        .metadata()
        .map_err(ArchiveError::io_at("read metadata", &entry.source))?
        .len();

    debug!(entry = %entry.name.display(), size, "adding file");
    let mut header = entry_header(entry, size);
    let mut reader = tracker.reader(file.take(size));
    append_exact(builder, &mut header, &entry.name, &mut reader, size)
        .map_err(ArchiveError::io_at("write archive", output))?;

    Ok(size)
}

/// Appends `size` bytes of content under `name`.
///
/// `tar::Builder` pads whatever it copied, so a source that yields fewer
/// bytes than the header announces would leave a misaligned archive. That
/// case is reported as `UnexpectedEof`.
fn append_exact<W: io::Write, R: Read>(
    builder: &mut Builder<W>,
    header: &mut Header,
    name: &Path,
    reader: R,
    size: u64,
) -> io::Result<()> {
    let mut counted = ReadCount { inner: reader, count: 0 };
    builder.append_data(header, name, &mut counted)?;
    if counted.count == size {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "'{}' changed size while archiving: expected {size} bytes, read {}",
                name.display(),
                counted.count
            ),
        ))
    }
}

struct ReadCount<R> {
    inner: R,
    count: u64,
}

impl<R: Read> Read for ReadCount<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

fn entry_header(entry: &ArchiveEntry, size: u64) -> Header {
    let mut header = Header::new_gnu();
    header.set_entry_type(entry.kind.to_tar());
    header.set_size(size);
    header.set_mode(entry.mode);
    header.set_mtime(entry.mtime);
    header
}
