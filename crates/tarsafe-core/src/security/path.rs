//! Path traversal validation.
//!
//! Entry names come from untrusted archive headers. Before anything is
//! written, the name is joined onto the destination, cleaned lexically and
//! checked to still lie under the destination, component by component.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::Result;
use crate::types::DestDir;

/// Lexically cleans a path without touching the filesystem.
///
/// `.` components are dropped and `..` removes the preceding normal
/// component. A `..` directly under a root is discarded, so an absolute
/// path never climbs above its root. For relative paths, leading `..`
/// components that cannot be resolved are kept.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use std::path::PathBuf;
/// use tarsafe_core::security::normalize;
///
/// assert_eq!(normalize(Path::new("/out/a/./b/../c")), PathBuf::from("/out/a/c"));
/// assert_eq!(normalize(Path::new("/out/../../etc")), PathBuf::from("/etc"));
/// assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    out.push(component);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component);
            }
        }
    }
    out
}

/// Resolves an archive entry name to its target path under `dest`.
///
/// The target is `normalize(dest / name)`. Absolute names replace the
/// destination on join and are rejected unless they happen to point back
/// inside it.
///
/// # Errors
///
/// Returns `ArchiveError::PathTraversal` if the target does not have the
/// destination as a component-wise prefix. `/out2/x` is not inside `/out`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tarsafe_core::security::resolve_entry_path;
/// use tarsafe_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/out")?;
/// assert!(resolve_entry_path(&dest, Path::new("docs/readme.txt")).is_ok());
/// assert!(resolve_entry_path(&dest, Path::new("../etc/passwd")).is_err());
/// # Ok(())
/// # }
/// ```
pub fn resolve_entry_path(dest: &DestDir, name: &Path) -> Result<PathBuf> {
    let target = normalize(&dest.as_path().join(name));

    if !target.starts_with(dest.as_path()) {
        return Err(ArchiveError::PathTraversal {
            entry: name.to_path_buf(),
            dest: dest.as_path().to_path_buf(),
        });
    }

    Ok(target)
}
