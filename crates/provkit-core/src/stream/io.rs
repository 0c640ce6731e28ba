//! Bridge from [`Stream`] to the `std::io` traits.

use std::io::{Read, Seek, SeekFrom, Write};

use super::{SeekMode, Stream};

/// Adapts a [`Stream`] to `std::io::{Read, Write, Seek}`.
///
/// Seeks keep the clamping behavior of the wrapped stream: an
/// out-of-range `SeekFrom` lands on the nearest bound instead of failing.
#[derive(Debug)]
pub struct StreamIo<S> {
    inner: S,
}

impl<S: Stream> StreamIo<S> {
    /// Wrap a stream.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the wrapped stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stream> Read for StreamIo<S> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<S: Stream> Write for StreamIo<S> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl<S: Stream> Seek for StreamIo<S> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        let (offset, mode) = match pos {
            SeekFrom::Start(n) => (i64::try_from(n).unwrap_or(i64::MAX), SeekMode::Start),
            SeekFrom::Current(n) => (n, SeekMode::Current),
            SeekFrom::End(n) => (n, SeekMode::End),
        };
        self.inner.seek(offset, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::MemoryStream;

    #[test]
    fn std_io_copy_through_adapter() {
        let mut src = StreamIo::new(MemoryStream::from_bytes(b"payload bytes".to_vec()));
        let mut dst = StreamIo::new(MemoryStream::new());
        let copied = std::io::copy(&mut src, &mut dst).unwrap();
        assert_eq!(copied, 13);
        assert_eq!(dst.into_inner().into_inner(), b"payload bytes");
    }

    #[test]
    fn seek_from_start_beyond_end_clamps() {
        let mut io = StreamIo::new(MemoryStream::from_bytes(vec![1, 2, 3]));
        assert_eq!(io.seek(SeekFrom::Start(u64::MAX)).unwrap(), 3);
        assert_eq!(io.seek(SeekFrom::End(-10)).unwrap(), 0);
        assert_eq!(io.stream_position().unwrap(), 0);
    }

    #[test]
    fn read_to_end_after_seek() {
        let mut io = StreamIo::new(MemoryStream::from_bytes(b"0123456789".to_vec()));
        io.seek(SeekFrom::Current(6)).unwrap();
        let mut rest = Vec::new();
        io.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"6789");
    }
}
