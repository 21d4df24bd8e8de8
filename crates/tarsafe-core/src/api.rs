//! High-level public API for archive creation and extraction.

use std::path::Path;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::CreationConfig;
use crate::creation::CreationReport;
use crate::formats::detect_format;
use crate::types::DestDir;

/// Archives `src` into `dst`, skipping paths that contain any of
/// `exclude_paths`.
///
/// Shorthand for [`create_archive`] with a [`CreationConfig`] built from
/// the exclusion list.
///
/// # Errors
///
/// See [`create_archive`].
///
/// # Examples
///
/// ```no_run
/// use tarsafe_core::archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = archive("project", "backup/project.tar.gz", &["target", ".git"])?;
/// println!("{} files archived", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn archive<P, Q, S>(src: P, dst: Q, exclude_paths: &[S]) -> Result<CreationReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<str>,
{
    let config = CreationConfig::default()
        .with_exclude_patterns(exclude_paths.iter().map(|s| s.as_ref().to_string()));
    create_archive(src, dst, &config)
}

/// Extracts the archive at `src` into `dst` with default settings.
///
/// An empty `dst` means the current working directory.
///
/// # Errors
///
/// See [`extract_archive`].
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<ExtractionReport> {
    extract_archive(src, dst, &ExtractionConfig::default())
}

/// Creates a `.tar` or `.tar.gz` archive from a file or directory.
///
/// The format follows the suffix of `dst`. Missing parent directories of
/// `dst` are created and an existing file is overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - `src` does not exist (`SourceNotFound`), checked before any I/O
/// - `dst` ends in neither `.tar` nor `.tar.gz` (`InvalidExtension`),
///   checked before any I/O
/// - walking the source or writing the archive fails; the partial archive
///   is left on disk
///
/// # Examples
///
/// ```no_run
/// use tarsafe_core::create_archive;
/// use tarsafe_core::creation::CreationConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CreationConfig::default().with_exclude("node_modules");
/// let report = create_archive("web", "web.tar", &config)?;
/// println!("{} bytes written", report.archive_bytes);
/// # Ok(())
/// # }
/// ```
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    config: &CreationConfig,
) -> Result<CreationReport> {
    create_archive_with_progress(src, dst, config, &mut NoopProgress)
}

/// Creates an archive, reporting progress to `progress`.
///
/// Entries are counted before writing starts, so `total` in
/// [`ProgressCallback::on_entry_start`] is exact.
///
/// # Errors
///
/// See [`create_archive`].
pub fn create_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    config: &CreationConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if !path_exists(src) {
        return Err(ArchiveError::SourceNotFound {
            path: src.to_path_buf(),
        });
    }
    let format = detect_format(dst)?;

    crate::creation::tar::create_tar_archive(src, dst, format, config, progress)
}

/// Extracts a `.tar` or `.tar.gz` archive into `dst`.
///
/// `dst` is made absolute, cleaned of `.` and `..` and created if needed;
/// an empty path means the current working directory. Existing files are
/// overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - `src` ends in neither `.tar` nor `.tar.gz` (`InvalidExtension`)
/// - an entry would land outside `dst` (`PathTraversal`)
/// - a header cannot be decoded (`InvalidArchive`)
/// - any I/O operation fails
///
/// Entries written before the failure stay on disk.
///
/// # Examples
///
/// ```no_run
/// use tarsafe_core::ExtractionConfig;
/// use tarsafe_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::default().with_preserve_permissions(false);
/// let report = extract_archive("backup.tar.gz", "/tmp/restore", &config)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    config: &ExtractionConfig,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(src, dst, config, &mut NoopProgress)
}

/// Extracts an archive, reporting progress to `progress`.
///
/// Tar streams carry no index, so `total` in
/// [`ProgressCallback::on_entry_start`] is always `0`.
///
/// # Errors
///
/// See [`extract_archive`].
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let src = src.as_ref();
    let format = detect_format(src)?;
    let dest = DestDir::new(dst)?;

    crate::extraction::engine::extract_tar_archive(src, &dest, format, config, progress)
}

/// Returns `true` if something exists at `path`.
///
/// An empty path never exists. Errors other than "not found", such as a
/// permission error on a parent, count as existing.
#[must_use]
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return false;
    }
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(err) => err.kind() != std::io::ErrorKind::NotFound,
    }
}
