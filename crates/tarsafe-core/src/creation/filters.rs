//! Path filtering and naming for archive creation.

use crate::creation::config::CreationConfig;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Returns `true` if `relative_name` contains any exclusion substring.
///
/// Matching is literal and case-sensitive: `"log"` excludes `logs/a.txt`
/// and `src/catalog.rs` alike.
///
/// # Examples
///
/// ```
/// use tarsafe_core::creation::CreationConfig;
/// use tarsafe_core::creation::filters;
///
/// let config = CreationConfig::default().with_exclude("node_modules");
/// assert!(filters::should_exclude("web/node_modules/x.js", &config));
/// assert!(!filters::should_exclude("web/index.js", &config));
/// ```
#[must_use]
pub fn should_exclude(relative_name: &str, config: &CreationConfig) -> bool {
    config
        .exclude_patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && relative_name.contains(pattern.as_str()))
}

/// Builds the archive entry name for `path` relative to `root`.
///
/// Only normal components are kept, with their OS bytes untouched. Returns
/// `None` if `path` is not under `root` or if nothing remains after
/// stripping (the root itself).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tarsafe_core::creation::filters;
///
/// let root = Path::new("/home/user/project");
/// let name = filters::archive_name(Path::new("/home/user/project/src/main.rs"), root);
/// assert_eq!(name.as_deref(), Some(Path::new("src/main.rs")));
/// assert_eq!(filters::archive_name(root, root), None);
/// ```
#[must_use]
pub fn archive_name(path: &Path, root: &Path) -> Option<PathBuf> {
    let relative = path.strip_prefix(root).ok()?;
    let name: PathBuf = relative
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect();

    (!name.as_os_str().is_empty()).then_some(name)
}

/// Text form of an entry name used for exclusion matching and messages.
///
/// Components are joined with `/` regardless of the host separator.
/// Bytes that are not valid UTF-8 are replaced, so this is never used as
/// the stored name.
#[must_use]
pub fn match_name(name: &Path) -> String {
    name.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
