//! Integration tests for tarsafe-core.
//!
//! These tests verify end-to-end workflows with real filesystem operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use tarsafe_core::ArchiveCreator;
use tarsafe_core::ArchiveError;
use tarsafe_core::CreationConfig;
use tarsafe_core::ExtractionConfig;
use tarsafe_core::ProgressCallback;
use tarsafe_core::archive;
use tarsafe_core::create_archive_with_progress;
use tarsafe_core::extract;
use tarsafe_core::extract_archive;
use tarsafe_core::extract_archive_with_progress;
use tempfile::TempDir;

const NO_EXCLUDES: &[&str] = &[];

fn sample_tree(root: &Path) {
    fs::create_dir_all(root.join("docs/nested")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("readme.txt"), "hello").unwrap();
    fs::write(root.join("docs/guide.md"), "# guide\n").unwrap();
    fs::write(root.join("docs/nested/data.bin"), [0u8, 1, 2, 255]).unwrap();
}

/// Writes a tar whose single entry carries `name` verbatim in the header.
fn hostile_tar(path: &Path, name: &str) {
    let mut header = tar::Header::new_ustar();
    header.as_ustar_mut().unwrap().name[..name.len()].copy_from_slice(name.as_bytes());
    header.set_size(5);
    header.set_mode(0o644);
    header.set_entry_type(tar::EntryType::Regular);
    header.set_cksum();

    let mut builder = tar::Builder::new(fs::File::create(path).unwrap());
    builder.append(&header, &b"pwned"[..]).unwrap();
    builder.finish().unwrap();
}

fn assert_same_tree(expected: &Path, actual: &Path) {
    for entry in walkdir::WalkDir::new(expected).min_depth(1) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(expected).unwrap();
        let other = actual.join(relative);
        if entry.file_type().is_dir() {
            assert!(other.is_dir(), "missing directory {}", relative.display());
        } else {
            assert_eq!(
                fs::read(entry.path()).unwrap(),
                fs::read(&other).unwrap(),
                "content differs for {}",
                relative.display()
            );
        }
    }
}

#[test]
fn test_single_file_round_trip_tar() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("note.txt");
    fs::write(&src, "single file").unwrap();
    let archive_path = temp.path().join("note.tar");

    let created = archive(&src, &archive_path, NO_EXCLUDES).unwrap();
    assert_eq!(created.files_added, 1);

    let out = temp.path().join("out");
    let extracted = extract(&archive_path, &out).unwrap();
    assert_eq!(extracted.files_extracted, 1);
    assert_eq!(fs::read_to_string(out.join("note.txt")).unwrap(), "single file");
}

#[test]
fn test_single_file_round_trip_tar_gz() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("note.txt");
    fs::write(&src, "compressed ".repeat(200)).unwrap();
    let archive_path = temp.path().join("note.tar.gz");

    let created = archive(&src, &archive_path, NO_EXCLUDES).unwrap();
    assert!(created.archive_bytes < created.content_bytes);
    assert_eq!(&fs::read(&archive_path).unwrap()[..2], &[0x1f, 0x8b]);

    let out = temp.path().join("out");
    extract(&archive_path, &out).unwrap();
    assert_eq!(fs::read(out.join("note.txt")).unwrap(), fs::read(&src).unwrap());
}

#[test]
fn test_directory_round_trip() {
    for suffix in ["tar", "tar.gz"] {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        sample_tree(&src);
        let archive_path = temp.path().join(format!("tree.{suffix}"));

        let created = archive(&src, &archive_path, NO_EXCLUDES).unwrap();
        assert_eq!(created.files_added, 3);
        assert_eq!(created.directories_added, 3);

        let out = temp.path().join("out");
        let extracted = extract(&archive_path, &out).unwrap();
        assert_eq!(extracted.files_extracted, 3);
        assert_eq!(extracted.directories_created, 3);

        assert_same_tree(&src, &out);
        assert!(out.join("empty").is_dir());
        assert!(!out.join("src").exists(), "source root must not be an entry");
    }
}

#[test]
fn test_exclusion_omits_matching_subpath() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    sample_tree(&src);
    let archive_path = temp.path().join("tree.tar");

    let created = archive(&src, &archive_path, &["nested"]).unwrap();
    assert_eq!(created.entries_excluded, 2);

    let out = temp.path().join("out");
    extract(&archive_path, &out).unwrap();
    assert!(out.join("docs/guide.md").exists());
    assert!(!out.join("docs/nested").exists());
}

#[test]
fn test_invalid_extensions() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();

    let result = archive(temp.path().join("a.txt"), temp.path().join("out.zip"), NO_EXCLUDES);
    assert!(matches!(result, Err(ArchiveError::InvalidExtension { .. })));
    assert!(!temp.path().join("out.zip").exists());

    let result = extract(temp.path().join("in.zip"), temp.path().join("out"));
    assert!(matches!(result, Err(ArchiveError::InvalidExtension { .. })));
}

#[test]
fn test_missing_source() {
    let temp = TempDir::new().unwrap();
    let result = archive("/nonexistent/tarsafe/source", temp.path().join("out.tar"), NO_EXCLUDES);
    assert!(matches!(result, Err(ArchiveError::SourceNotFound { .. })));
    assert!(!temp.path().join("out.tar").exists());
}

#[test]
fn test_path_traversal_is_rejected() {
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("evil.tar");
    hostile_tar(&archive_path, "../evil");

    let out = temp.path().join("out");
    let err = extract(&archive_path, &out).unwrap_err();
    assert!(err.is_security_violation());
    assert!(!temp.path().join("evil").exists());
}

#[test]
fn test_sibling_prefix_confusion_is_rejected() {
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("evil.tar");
    hostile_tar(&archive_path, "../out2/x");

    let err = extract(&archive_path, temp.path().join("out")).unwrap_err();
    assert!(matches!(err, ArchiveError::PathTraversal { .. }));
    assert!(!temp.path().join("out2").exists());
}

#[test]
fn test_inner_parent_that_stays_inside_is_allowed() {
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("odd.tar");
    hostile_tar(&archive_path, "a/../b.txt");

    let out = temp.path().join("out");
    extract(&archive_path, &out).unwrap();
    assert_eq!(fs::read(out.join("b.txt")).unwrap(), b"pwned");
}

#[test]
fn test_extract_twice_overwrites() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    sample_tree(&src);
    let archive_path = temp.path().join("tree.tar.gz");
    archive(&src, &archive_path, NO_EXCLUDES).unwrap();

    let out = temp.path().join("out");
    extract(&archive_path, &out).unwrap();
    fs::write(out.join("readme.txt"), "modified and much longer than before").unwrap();

    extract(&archive_path, &out).unwrap();
    assert_eq!(fs::read_to_string(out.join("readme.txt")).unwrap(), "hello");
}

#[test]
fn test_destination_is_normalized() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("note.txt");
    fs::write(&src, "x").unwrap();
    let archive_path = temp.path().join("note.tar");
    archive(&src, &archive_path, NO_EXCLUDES).unwrap();

    let messy = temp.path().join("a").join("..").join("out");
    extract(&archive_path, &messy).unwrap();
    assert!(temp.path().join("out/note.txt").exists());
}

#[test]
fn test_archive_inside_source_is_not_self_included() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    sample_tree(&src);
    let archive_path = src.join("backup/self.tar");

    archive(&src, &archive_path, NO_EXCLUDES).unwrap();
    // Second run sees the first archive on disk.
    let report = archive(&src, &archive_path, NO_EXCLUDES).unwrap();
    assert_eq!(report.files_added, 3);

    let out = temp.path().join("out");
    extract(&archive_path, &out).unwrap();
    assert!(!out.join("backup/self.tar").exists());
}

#[test]
fn test_archive_creator_builder() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    sample_tree(&src);
    let archive_path = temp.path().join("built.tar.gz");

    let report = ArchiveCreator::new()
        .source(&src)
        .output(&archive_path)
        .config(CreationConfig::default().with_exclude("docs"))
        .create()
        .unwrap();

    assert_eq!(report.files_added, 1);
    assert_eq!(report.entries_excluded, 4);
}

#[cfg(unix)]
#[test]
fn test_file_modes_restored() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    let script = src.join("run.sh");
    fs::write(&script, "#!/bin/sh\necho hi\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o750)).unwrap();
    let archive_path = temp.path().join("modes.tar");
    archive(&src, &archive_path, NO_EXCLUDES).unwrap();

    let out = temp.path().join("out");
    extract_archive(&archive_path, &out, &ExtractionConfig::default()).unwrap();
    let mode = fs::metadata(out.join("run.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o750);
}

#[cfg(unix)]
#[test]
fn test_symlinks_skipped_on_create() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("real.txt"), "real").unwrap();
    std::os::unix::fs::symlink("real.txt", src.join("link.txt")).unwrap();
    let archive_path = temp.path().join("links.tar");

    let report = archive(&src, &archive_path, NO_EXCLUDES).unwrap();
    assert_eq!(report.files_added, 1);
    assert_eq!(report.entries_skipped, 1);
    assert!(report.has_warnings());
}

#[derive(Default)]
struct CountingProgress {
    started: Vec<(usize, usize)>,
    bytes: u64,
    completed: usize,
    finished: bool,
}

impl ProgressCallback for CountingProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, current: usize) {
        self.started.push((total, current));
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes += bytes;
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.completed += 1;
    }

    fn on_complete(&mut self) {
        self.finished = true;
    }
}

#[cfg(unix)]
#[test]
fn test_non_utf8_names_round_trip() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("sub")).unwrap();
    let raw = OsStr::from_bytes(b"caf\xe9.txt");
    if fs::write(src.join("sub").join(raw), "latin-1").is_err() {
        return;
    }
    let out = temp.path().join("names.tar.gz");
    let dest = temp.path().join("dest");

    archive(&src, &out, NO_EXCLUDES).unwrap();
    extract(&out, &dest).unwrap();

    assert_eq!(fs::read(dest.join("sub").join(raw)).unwrap(), b"latin-1");
}

#[test]
fn test_progress_callbacks() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    sample_tree(&src);
    let archive_path = temp.path().join("tree.tar");

    let mut progress = CountingProgress::default();
    let report =
        create_archive_with_progress(&src, &archive_path, &CreationConfig::default(), &mut progress)
            .unwrap();
    assert_eq!(progress.started.len(), report.total_items());
    assert!(progress.started.iter().all(|(total, _)| *total == 6));
    assert_eq!(progress.started.last(), Some(&(6, 6)));
    assert_eq!(progress.bytes, report.content_bytes);
    assert_eq!(progress.completed, 6);
    assert!(progress.finished);

    let mut progress = CountingProgress::default();
    let report = extract_archive_with_progress(
        &archive_path,
        temp.path().join("out"),
        &ExtractionConfig::default(),
        &mut progress,
    )
    .unwrap();
    assert!(progress.started.iter().all(|(total, _)| *total == 0));
    assert_eq!(progress.bytes, report.bytes_written);
    assert!(progress.finished);
}
