//! File-backed stream.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::{closed_error, resolve_seek, SeekMode, Stream};

/// How a [`FileStream`] opens its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// Read an existing file.
    Read,
    /// Create or truncate, write only.
    Write,
    /// Read and write, creating the file if it does not exist.
    ReadWrite,
}

/// A [`Stream`] over a file handle.
///
/// The handle is released by [`Stream::close`]. If the stream is dropped
/// while still open, it is flushed and closed on a best-effort basis and a
/// failure is logged.
#[derive(Debug)]
pub struct FileStream {
    file: Option<File>,
    path: PathBuf,
    position: u64,
}

impl FileStream {
    /// Open `path` in the given mode.
    pub fn open(path: impl AsRef<Path>, mode: FileMode) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        match mode {
            FileMode::Read => options.read(true),
            FileMode::Write => options.write(true).create(true).truncate(true),
            FileMode::ReadWrite => options.read(true).write(true).create(true),
        };
        let file = options.open(&path)?;
        tracing::debug!(path = %path.display(), ?mode, "file stream opened");
        Ok(Self {
            file: Some(file),
            path,
            position: 0,
        })
    }

    /// The path this stream was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current length of the file.
    pub fn len(&self) -> std::io::Result<u64> {
        Ok(self.handle_ref()?.metadata()?.len())
    }

    /// Returns true if the file is currently empty.
    pub fn is_empty(&self) -> std::io::Result<bool> {
        Ok(self.len()? == 0)
    }

    fn handle_ref(&self) -> std::io::Result<&File> {
        self.file.as_ref().ok_or_else(closed_error)
    }

    fn handle(&mut self) -> std::io::Result<&mut File> {
        self.file.as_mut().ok_or_else(closed_error)
    }
}

impl Stream for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.handle()?.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }

    fn seek(&mut self, offset: i64, mode: SeekMode) -> std::io::Result<u64> {
        let len = self.len()?;
        let target = resolve_seek(self.position, len, offset, mode);
        self.handle()?.seek(SeekFrom::Start(target))?;
        self.position = target;
        Ok(target)
    }

    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.handle()?.write_all(data)?;
        self.position += data.len() as u64;
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let file = self.handle()?;
        file.flush()?;
        file.sync_data()
    }

    fn close(&mut self) -> std::io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            tracing::debug!(path = %self.path.display(), "file stream closed");
        }
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}

impl Drop for FileStream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to close file stream");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");

        let mut w = FileStream::open(&path, FileMode::Write).unwrap();
        assert_eq!(w.write(b"hello world").unwrap(), 11);
        w.flush().unwrap();
        w.close().unwrap();

        let mut r = FileStream::open(&path, FileMode::Read).unwrap();
        assert_eq!(r.read_up_to(5).unwrap(), b"hello");
        assert_eq!(r.position(), 5);
        assert_eq!(r.read_up_to(100).unwrap(), b" world");
        assert_eq!(r.read_up_to(100).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn read_up_to_huge_max_returns_remaining() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ten.bin");
        std::fs::write(&path, b"0123456789").unwrap();

        let mut s = FileStream::open(&path, FileMode::Read).unwrap();
        s.seek(3, SeekMode::Start).unwrap();
        assert_eq!(s.read_up_to(usize::MAX).unwrap(), b"3456789");
        assert_eq!(s.position(), 10);
    }

    #[test]
    fn read_up_to_spans_several_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();

        let mut s = FileStream::open(&path, FileMode::Read).unwrap();
        assert_eq!(s.read_up_to(usize::MAX).unwrap(), data);
    }

    #[test]
    fn seek_clamps_like_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ten.bin");
        std::fs::write(&path, b"0123456789").unwrap();

        let mut s = FileStream::open(&path, FileMode::Read).unwrap();
        assert_eq!(s.seek(5, SeekMode::Current).unwrap(), 5);
        assert_eq!(s.read_up_to(100).unwrap(), b"56789");
        assert_eq!(s.seek(99, SeekMode::Start).unwrap(), 10);
        assert_eq!(s.seek(-99, SeekMode::End).unwrap(), 0);
        assert_eq!(s.seek(-2, SeekMode::End).unwrap(), 8);
    }

    #[test]
    fn mid_file_write_overlays_and_extends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.bin");
        std::fs::write(&path, b"abcdef").unwrap();

        let mut s = FileStream::open(&path, FileMode::ReadWrite).unwrap();
        s.seek(4, SeekMode::Start).unwrap();
        s.write(b"XYZ").unwrap();
        assert_eq!(s.position(), 7);
        s.flush().unwrap();
        s.close().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"abcdXYZ");
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileStream::open(dir.path().join("nope"), FileMode::Read).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn write_only_stream_cannot_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = FileStream::open(dir.path().join("wo.bin"), FileMode::Write).unwrap();
        s.write(b"data").unwrap();
        s.seek(0, SeekMode::Start).unwrap();
        assert!(s.read_up_to(4).is_err());
    }

    #[test]
    fn closed_stream_rejects_operations() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = FileStream::open(dir.path().join("c.bin"), FileMode::ReadWrite).unwrap();
        s.close().unwrap();
        assert!(s.write(b"x").is_err());
        assert!(s.seek(0, SeekMode::Start).is_err());
        s.close().unwrap();
    }
}
