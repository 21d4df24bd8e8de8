//! Core value types shared by the archiver and the extractor.
//!
//! - `ArchiveEntry`: one file or directory record, as walked or as decoded.
//! - `DestDir`: the normalized, existing extraction root.

pub mod dest_dir;
pub mod entry;

pub use dest_dir::DestDir;
pub use entry::ArchiveEntry;
pub use entry::EntryKind;
