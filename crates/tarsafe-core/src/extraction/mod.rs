//! Archive extraction.

pub(crate) mod engine;
