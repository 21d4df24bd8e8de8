//! Byte counting at the bottom of the archive writer stack.

use std::io;
use std::io::Write;

/// Sits between the compression stage and the archive file and records how
/// many bytes actually reached the file.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use tarsafe_core::io::CountingWriter;
///
/// let mut sink = CountingWriter::new(Vec::new());
/// sink.write_all(b"ustar")?;
/// assert_eq!(sink.bytes_written(), 5);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W> CountingWriter<W> {
    /// Wraps `inner` with a zero count.
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Bytes accepted by the inner writer so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.count
    }

    /// Releases the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
