//! Source tree traversal for archive creation.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;
use walkdir::WalkDir;

use crate::ArchiveError;
use crate::Result;
use crate::creation::config::CreationConfig;
use crate::creation::filters;
use crate::security::path::normalize;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;

/// Entries selected from a source, plus what was left out.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Entries to write, in walk order.
    pub entries: Vec<ArchiveEntry>,
    /// Paths dropped by an exclusion substring.
    pub excluded: usize,
    /// One message per symlink or special file that was not archived.
    pub skipped: Vec<String>,
}

/// Collects the entries of `source` in a single pass.
///
/// A regular file yields one entry named after its base name. A directory
/// is walked depth-first with siblings sorted by file name; the root
/// itself is not included and links are not followed. When `output` lies
/// inside `source`, the archive file is left out.
///
/// An excluded directory is not pruned: its children are visited and only
/// dropped if they match an exclusion themselves.
///
/// # Errors
///
/// Returns `ArchiveError::SourceNotFound` if `source` does not exist, and
/// an I/O error if any part of the tree cannot be read.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use std::path::PathBuf;
/// use tarsafe_core::creation::CreationConfig;
/// use tarsafe_core::creation::walker::collect_entries;
///
/// let outcome = collect_entries(Path::new("./src"), &CreationConfig::default(), None)?;
/// println!("{} entries", outcome.entries.len());
/// # Ok::<(), tarsafe_core::ArchiveError>(())
/// ```
pub fn collect_entries(
    source: &Path,
    config: &CreationConfig,
    output: Option<&Path>,
) -> Result<WalkOutcome> {
    let metadata = fs::metadata(source).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ArchiveError::SourceNotFound {
            path: source.to_path_buf(),
        },
        _ => ArchiveError::io_at("read metadata", source)(err),
    })?;

    let mut outcome = WalkOutcome::default();

    if !metadata.is_dir() {
        let name = source
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| ArchiveError::InvalidConfiguration {
                reason: format!("source has no file name: {}", source.display()),
            })?;
        if metadata.is_file() {
            outcome.entries.push(ArchiveEntry::from_metadata(
                source.to_path_buf(),
                name,
                EntryKind::File,
                &metadata,
            ));
        } else {
            skip(&mut outcome, &name, "not a regular file");
        }
        return Ok(outcome);
    }

    let output_name = output.and_then(|output| own_archive_name(source, output));

    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(source).to_path_buf();
            ArchiveError::io_at("walk", path)(err.into())
        })?;

        let Some(name) = filters::archive_name(entry.path(), source) else {
            continue;
        };

        let text = filters::match_name(&name);
        if filters::should_exclude(&text, config) {
            debug!(entry = %text, "excluded");
            outcome.excluded += 1;
            continue;
        }

        if output_name.as_ref() == Some(&name) {
            debug!(entry = %text, "skipping the archive being written");
            continue;
        }

        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            skip(&mut outcome, &name, "symlink");
            continue;
        } else {
            skip(&mut outcome, &name, "special file");
            continue;
        };

        let metadata = entry
            .metadata()
            .map_err(|err| ArchiveError::io_at("read metadata", entry.path())(err.into()))?;

        outcome.entries.push(ArchiveEntry::from_metadata(
            entry.into_path(),
            name,
            kind,
            &metadata,
        ));
    }

    Ok(outcome)
}

fn skip(outcome: &mut WalkOutcome, name: &Path, reason: &str) {
    let name = filters::match_name(name);
    warn!(entry = %name, reason, "skipping unsupported entry");
    outcome.skipped.push(format!("skipped '{name}': {reason}"));
}

/// Entry name the output archive would have if it lies inside `source`.
fn own_archive_name(source: &Path, output: &Path) -> Option<PathBuf> {
    let source = normalize(&std::path::absolute(source).ok()?);
    let output = normalize(&std::path::absolute(output).ok()?);
    filters::archive_name(&output, &source)
}
