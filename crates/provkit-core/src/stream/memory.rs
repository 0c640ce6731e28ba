//! In-memory stream backed by a growable buffer.

use super::{closed_error, resolve_seek, SeekMode, Stream};

/// A [`Stream`] over an owned, growable byte buffer.
///
/// Reads and writes operate on the live buffer. [`Stream::flush`]
/// publishes a snapshot of that buffer, and [`MemoryStream::snapshot`]
/// returns the last published state, which is what a fresh reader of the
/// same content should be built from.
#[derive(Debug, Default)]
pub struct MemoryStream {
    buf: Vec<u8>,
    position: usize,
    snapshot: Vec<u8>,
    closed: bool,
}

impl MemoryStream {
    /// An empty stream, typically used as a write destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stream over existing bytes, positioned at the start.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let buf = bytes.into();
        Self {
            snapshot: buf.clone(),
            buf,
            position: 0,
            closed: false,
        }
    }

    /// Length of the live buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the live buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns true once `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The buffer as of the last flush (or construction).
    pub fn snapshot(&self) -> &[u8] {
        &self.snapshot
    }

    /// Consume the stream and return the live buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    fn ensure_open(&self) -> std::io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(())
    }
}

impl Stream for MemoryStream {
    fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
        self.ensure_open()?;
        let available = self.buf.len() - self.position;
        let n = available.min(out.len());
        out[..n].copy_from_slice(&self.buf[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }

    fn seek(&mut self, offset: i64, mode: SeekMode) -> std::io::Result<u64> {
        self.ensure_open()?;
        let target = resolve_seek(self.position as u64, self.buf.len() as u64, offset, mode);
        // target <= buf.len(), which already fits in usize.
        self.position = target as usize;
        Ok(target)
    }

    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.ensure_open()?;
        let overlay = data.len().min(self.buf.len() - self.position);
        self.buf[self.position..self.position + overlay].copy_from_slice(&data[..overlay]);
        self.buf.extend_from_slice(&data[overlay..]);
        self.position += data.len();
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.ensure_open()?;
        self.snapshot.clone_from(&self.buf);
        tracing::trace!(len = self.snapshot.len(), "memory stream flushed");
        Ok(())
    }

    fn close(&mut self) -> std::io::Result<()> {
        self.closed = true;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position as u64
    }

    fn read_up_to(&mut self, max_len: usize) -> std::io::Result<Vec<u8>> {
        self.ensure_open()?;
        let n = max_len.min(self.buf.len() - self.position);
        let out = self.buf[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(out)
    }
}
