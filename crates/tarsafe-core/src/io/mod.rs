//! I/O wrappers shared by archive creation and extraction.

pub mod counting;
pub mod progress;

pub use counting::CountingWriter;
pub use progress::ProgressReader;
pub use progress::ProgressTracker;
