//! Security checks applied during extraction.

pub mod path;

pub use path::normalize;
pub use path::resolve_entry_path;
