//! Create and safely extract tar and tar.gz archives.
//!
//! `tarsafe-core` archives a file or directory tree into a `.tar` or
//! `.tar.gz` file and extracts such archives back, refusing any entry whose
//! name would resolve outside the destination directory.
//!
//! # Examples
//!
//! ```no_run
//! use tarsafe_core::archive;
//! use tarsafe_core::extract;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! archive("project", "project.tar.gz", &["target"])?;
//! let report = extract("project.tar.gz", "/tmp/restore")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod io;
pub mod report;
pub mod security;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::archive;
pub use api::create_archive;
pub use api::create_archive_with_progress;
pub use api::extract;
pub use api::extract_archive;
pub use api::extract_archive_with_progress;
pub use api::path_exists;
pub use config::ExtractionConfig;
pub use creation::ArchiveCreator;
pub use creation::CreationConfig;
pub use creation::CreationReport;
pub use error::ArchiveError;
pub use error::Result;
pub use formats::ArchiveFormat;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use types::DestDir;
pub use types::EntryKind;
