//! Compression stage wrapping the tar byte stream.
//!
//! A tar stream is either written/read as-is (`.tar`) or passed through gzip
//! (`.tar.gz`). Both directions are modelled as a tagged choice between the
//! two strategies, selected from an [`ArchiveFormat`].

use std::io;
use std::io::Read;
use std::io::Write;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use super::detect::ArchiveFormat;

/// Output side of the compression stage.
///
/// Wraps the destination writer. Call [`ArchiveWriter::finish`] after the tar
/// trailer has been written so the gzip trailer is emitted before the
/// underlying writer is released.
#[derive(Debug)]
pub enum ArchiveWriter<W: Write> {
    /// Bytes pass through unchanged.
    Plain(W),
    /// Bytes are gzip-compressed at the default level.
    Gzip(GzEncoder<W>),
}

impl<W: Write> ArchiveWriter<W> {
    /// Wraps `inner` according to `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Write;
    /// use tarsafe_core::formats::ArchiveFormat;
    /// use tarsafe_core::formats::ArchiveWriter;
    ///
    /// let mut writer = ArchiveWriter::new(Vec::new(), ArchiveFormat::TarGz);
    /// writer.write_all(b"payload")?;
    /// let bytes = writer.finish()?;
    /// assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn new(inner: W, format: ArchiveFormat) -> Self {
        match format {
            ArchiveFormat::Tar => Self::Plain(inner),
            ArchiveFormat::TarGz => Self::Gzip(GzEncoder::new(inner, Compression::default())),
        }
    }

    /// Finalizes the compression stage and returns the flushed inner writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the gzip trailer or flushing fails.
    pub fn finish(self) -> io::Result<W> {
        let mut inner = match self {
            Self::Plain(inner) => inner,
            Self::Gzip(encoder) => encoder.finish()?,
        };
        inner.flush()?;
        Ok(inner)
    }
}

impl<W: Write> Write for ArchiveWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(inner) => inner.write(buf),
            Self::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(inner) => inner.flush(),
            Self::Gzip(encoder) => encoder.flush(),
        }
    }
}

/// Input side of the compression stage.
#[derive(Debug)]
pub enum ArchiveReader<R: Read> {
    /// Bytes pass through unchanged.
    Plain(R),
    /// Bytes are gzip-decompressed. Concatenated members are read as one
    /// stream.
    Gzip(MultiGzDecoder<R>),
}

impl<R: Read> ArchiveReader<R> {
    /// Wraps `inner` according to `format`.
    pub fn new(inner: R, format: ArchiveFormat) -> Self {
        match format {
            ArchiveFormat::Tar => Self::Plain(inner),
            ArchiveFormat::TarGz => Self::Gzip(MultiGzDecoder::new(inner)),
        }
    }
}

impl<R: Read> Read for ArchiveReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(inner) => inner.read(buf),
            Self::Gzip(decoder) => decoder.read(buf),
        }
    }
}
