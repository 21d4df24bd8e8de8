//! Extraction configuration.

/// Options controlling how entries are materialized on disk.
///
/// # Examples
///
/// ```
/// use tarsafe_core::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert!(config.preserve_permissions);
///
/// let config = ExtractionConfig::default().with_preserve_permissions(false);
/// assert!(!config.preserve_permissions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Apply the mode recorded in each header to the created file or
    /// directory. When `false` the process default mode is used.
    pub preserve_permissions: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            preserve_permissions: true,
        }
    }
}

impl ExtractionConfig {
    /// Sets whether recorded modes are applied.
    #[must_use]
    pub const fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}
