//! Helpers for crafting tar streams in unit tests.
//!
//! Names are copied into the header verbatim, bypassing the `tar` crate's
//! own path checks, so hostile entries such as `../evil` can be produced.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

/// One header plus content for [`raw_tar`].
#[derive(Debug, Clone)]
pub struct RawEntry {
    name: String,
    entry_type: tar::EntryType,
    data: Vec<u8>,
    mode: u32,
    link: Option<String>,
}

impl RawEntry {
    /// Regular file with mode `0o644`.
    pub fn file(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            entry_type: tar::EntryType::Regular,
            data: data.to_vec(),
            mode: 0o644,
            link: None,
        }
    }

    /// Directory with mode `0o755`.
    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entry_type: tar::EntryType::Directory,
            data: Vec::new(),
            mode: 0o755,
            link: None,
        }
    }

    /// Symbolic link pointing at `target`.
    pub fn symlink(name: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            entry_type: tar::EntryType::Symlink,
            data: Vec::new(),
            mode: 0o777,
            link: Some(target.to_string()),
        }
    }

    /// Overrides the recorded mode.
    pub const fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }
}

/// Builds an uncompressed tar stream from raw entries.
#[must_use]
pub fn raw_tar(entries: &[RawEntry]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for entry in entries {
        let mut header = tar::Header::new_ustar();
        {
            let ustar = header.as_ustar_mut().unwrap();
            ustar.name[..entry.name.len()].copy_from_slice(entry.name.as_bytes());
            if let Some(link) = &entry.link {
                ustar.linkname[..link.len()].copy_from_slice(link.as_bytes());
            }
        }
        header.set_size(entry.data.len() as u64);
        header.set_mode(entry.mode);
        header.set_entry_type(entry.entry_type);
        header.set_cksum();
        builder.append(&header, entry.data.as_slice()).unwrap();
    }
    builder.into_inner().unwrap()
}
