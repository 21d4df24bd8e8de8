//! Configuration for archive creation.

/// Options controlling which walked paths end up in the archive.
///
/// # Examples
///
/// ```
/// use tarsafe_core::creation::CreationConfig;
///
/// let config = CreationConfig::default()
///     .with_exclude("target")
///     .with_exclude(".git");
/// assert_eq!(config.exclude_patterns.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationConfig {
    /// Literal substrings. A walked path whose name relative to the source
    /// root contains any of them is left out. Empty patterns are ignored.
    ///
    /// Default: empty (archive everything).
    pub exclude_patterns: Vec<String>,
}

impl CreationConfig {
    /// Creates a configuration that excludes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one exclusion substring.
    #[must_use]
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Replaces the exclusion substrings.
    #[must_use]
    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}
