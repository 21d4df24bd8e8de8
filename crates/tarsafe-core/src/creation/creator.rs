//! Builder for creating archives with a fluent API.

use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::Result;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;

/// Fluent front end for [`create_archive`](crate::create_archive).
///
/// # Examples
///
/// ```no_run
/// use tarsafe_core::creation::ArchiveCreator;
///
/// let report = ArchiveCreator::new()
///     .source("project/")
///     .output("backup.tar.gz")
///     .exclude("target")
///     .exclude(".git")
///     .create()?;
///
/// println!("archived {} files", report.files_added);
/// # Ok::<(), tarsafe_core::ArchiveError>(())
/// ```
#[derive(Debug, Default)]
pub struct ArchiveCreator {
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    config: CreationConfig,
}

impl ArchiveCreator {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file or directory to archive.
    #[must_use]
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive path. Its suffix selects `.tar` or `.tar.gz`.
    #[must_use]
    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds an exclusion substring.
    #[must_use]
    pub fn exclude<S: Into<String>>(mut self, pattern: S) -> Self {
        self.config.exclude_patterns.push(pattern.into());
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: CreationConfig) -> Self {
        self.config = config;
        self
    }

    /// Creates the archive.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidConfiguration` if the source or output
    /// was never set, otherwise any error of
    /// [`create_archive`](crate::create_archive).
    pub fn create(self) -> Result<CreationReport> {
        let source = self
            .source
            .ok_or_else(|| ArchiveError::InvalidConfiguration {
                reason: "source path not set".to_string(),
            })?;
        let output = self
            .output
            .ok_or_else(|| ArchiveError::InvalidConfiguration {
                reason: "output path not set".to_string(),
            })?;

        crate::api::create_archive(&source, &output, &self.config)
    }
}
