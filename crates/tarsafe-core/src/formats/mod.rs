//! Archive format detection and the compression stage.

pub mod compression;
pub mod detect;

pub use compression::ArchiveReader;
pub use compression::ArchiveWriter;
pub use detect::ArchiveFormat;
pub use detect::detect_format;
