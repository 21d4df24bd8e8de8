//! Archive creation.
//!
//! - `walker`: selects entries from the source tree.
//! - `filters`: exclusion matching and entry naming.
//! - `tar`: writes the selected entries through the compression stage.

pub mod filters;
pub mod walker;

pub mod config;
pub mod creator;
pub mod report;
pub(crate) mod tar;

pub use config::CreationConfig;
pub use creator::ArchiveCreator;
pub use report::CreationReport;
pub use walker::WalkOutcome;
