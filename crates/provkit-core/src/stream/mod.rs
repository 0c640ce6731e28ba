//! # Seekable Streams
//!
//! The single I/O contract between provkit and the external signing
//! engine. The engine receives a source stream (read-only traversal of the
//! original asset) and a destination stream (write target for the signed
//! output) and performs its own seeks while embedding.
//!
//! ## Invariants
//!
//! - `0 <= position <= len` at all times.
//! - Seeks never fail on range: the candidate position is clamped into
//!   `[0, len]` before it is committed.
//! - Writing at `position < len` overlays existing bytes and appends only
//!   the part that runs past the end.
//! - After `close()`, every operation except `close()` fails.
//!
//! Both [`MemoryStream`] and [`FileStream`] satisfy the same semantics so
//! callers can swap one for the other.

mod file;
mod io;
mod memory;

pub use file::{FileMode, FileStream};
pub use io::StreamIo;
pub use memory::MemoryStream;

/// Chunk size used by the default [`Stream::read_up_to`].
const READ_CHUNK: usize = 8 * 1024;

/// Origin for a [`Stream::seek`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekMode {
    /// Offset is measured from the start of the data.
    Start,
    /// Offset is relative to the current position.
    Current,
    /// Offset is relative to the end of the data.
    End,
}

/// A seekable, readable, writable byte channel.
///
/// Streams are single-owner and carry no internal synchronization.
pub trait Stream {
    /// Read up to `buf.len()` bytes at the current position. Returns 0 at
    /// end of data.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;

    /// Move the cursor and return the new, clamped position.
    fn seek(&mut self, offset: i64, mode: SeekMode) -> std::io::Result<u64>;

    /// Write `data` at the current position and return the number of bytes written.
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize>;

    /// Make previously written bytes visible to fresh readers.
    fn flush(&mut self) -> std::io::Result<()>;

    /// Release the underlying resource. Idempotent.
    fn close(&mut self) -> std::io::Result<()>;

    /// Current cursor position.
    fn position(&self) -> u64;

    /// Read at most `max_len` bytes and return them as an owned buffer.
    ///
    /// The buffer grows with the bytes actually read, never with
    /// `max_len`, so `usize::MAX` means "everything that is left".
    fn read_up_to(&mut self, max_len: usize) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        while out.len() < max_len {
            let want = (max_len - out.len()).min(READ_CHUNK);
            let n = self.read(&mut chunk[..want])?;
            if n == 0 {
                break;
            }
            out.extend_from_slice(&chunk[..n]);
        }
        Ok(out)
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        (**self).read(buf)
    }

    fn seek(&mut self, offset: i64, mode: SeekMode) -> std::io::Result<u64> {
        (**self).seek(offset, mode)
    }

    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        (**self).write(data)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> std::io::Result<()> {
        (**self).close()
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn read_up_to(&mut self, max_len: usize) -> std::io::Result<Vec<u8>> {
        (**self).read_up_to(max_len)
    }
}

/// Compute a clamped seek target.
///
/// The candidate is `offset` from start, current position, or end, and
/// the result always lies in `[0, len]`.
pub fn resolve_seek(position: u64, len: u64, offset: i64, mode: SeekMode) -> u64 {
    let base: i128 = match mode {
        SeekMode::Start => 0,
        SeekMode::Current => i128::from(position),
        SeekMode::End => i128::from(len),
    };
    let candidate = base + i128::from(offset);
    // Clamped into [0, len], so the cast cannot truncate.
    candidate.clamp(0, i128::from(len)) as u64
}

pub(crate) fn closed_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, "stream is closed")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn seek_mode() -> impl Strategy<Value = SeekMode> {
        prop_oneof![
            Just(SeekMode::Start),
            Just(SeekMode::Current),
            Just(SeekMode::End),
        ]
    }

    proptest! {
        /// Any seek on a stream of length L lands in [0, L].
        #[test]
        fn memory_seek_is_clamped(
            data in prop::collection::vec(any::<u8>(), 0..256),
            start in any::<i64>(),
            offset in any::<i64>(),
            mode in seek_mode(),
        ) {
            let len = data.len() as u64;
            let mut stream = MemoryStream::from_bytes(data);
            stream.seek(start, SeekMode::Start).unwrap();
            let pos = stream.seek(offset, mode).unwrap();
            prop_assert!(pos <= len);
            prop_assert_eq!(pos, stream.position());
        }

        /// Writing k bytes at position p < L overlays min(k, L - p) bytes
        /// and appends the rest.
        #[test]
        fn memory_mid_buffer_write_overlays(
            data in prop::collection::vec(any::<u8>(), 1..128),
            write in prop::collection::vec(any::<u8>(), 0..128),
            at in any::<prop::sample::Index>(),
        ) {
            let len = data.len();
            let pos = at.index(len);
            let mut stream = MemoryStream::from_bytes(data.clone());
            stream.seek(pos as i64, SeekMode::Start).unwrap();
            let n = stream.write(&write).unwrap();
            prop_assert_eq!(n, write.len());
            prop_assert_eq!(stream.position(), (pos + write.len()) as u64);

            let mut expected = data[..pos].to_vec();
            expected.extend_from_slice(&write);
            if pos + write.len() < len {
                expected.extend_from_slice(&data[pos + write.len()..]);
            }
            let out = stream.into_inner();
            prop_assert_eq!(out.len(), len.max(pos + write.len()));
            prop_assert_eq!(out, expected);
        }
    }
}
