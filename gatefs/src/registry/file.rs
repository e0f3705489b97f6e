use std::fs::{self, File, Metadata};
use std::io::{self, Read};
use std::mem;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{GateFsError, Result};

/// Lifecycle of the descriptor behind a [`LazyFile`].
///
/// `Unopened -> Opened` happens on the first read and `Opened -> Closed` on
/// close. Closing an unopened handle leaves it unopened. Nothing ever leaves
/// `Closed`.
#[derive(Debug)]
enum FileState {
    Unopened,
    Opened(File),
    Closed,
}

/// Where a [`LazyFile`] is in its open/close lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Unopened,
    Opened,
    Closed,
}

/// A registered file that is only opened once somebody reads from it.
///
/// The descriptor is opened at most once over the lifetime of the handle
/// and is released either by [`LazyFile::close`] or when the handle drops.
/// Reads on one handle are serialized by an internal lock, so two threads
/// sharing a handle also share its file cursor.
#[derive(Debug)]
pub struct LazyFile {
    path: PathBuf,
    state: Mutex<FileState>,
}

impl LazyFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(FileState::Unopened),
        }
    }

    /// The on-disk path this handle reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> FileStatus {
        match *self.state.lock() {
            FileState::Unopened => FileStatus::Unopened,
            FileState::Opened(_) => FileStatus::Opened,
            FileState::Closed => FileStatus::Closed,
        }
    }

    /// Query the filesystem for the metadata of the underlying path.
    ///
    /// Never cached and independent of whether the file has been opened.
    pub fn stat(&self) -> Result<Metadata> {
        fs::metadata(&self.path).map_err(|source| GateFsError::Stat {
            path: self.path.clone(),
            source,
        })
    }

    /// Read into `buf`, opening the underlying file first if needed.
    ///
    /// A failed open reports no bytes and leaves the handle unopened.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        let mut state = self.state.lock();
        if matches!(*state, FileState::Unopened) {
            let file = File::open(&self.path).map_err(|source| GateFsError::Open {
                path: self.path.clone(),
                source,
            })?;
            debug!(path = %self.path.display(), "opened registered file");
            *state = FileState::Opened(file);
        }

        match &mut *state {
            FileState::Opened(file) => file.read(buf).map_err(|source| GateFsError::Read {
                path: self.path.clone(),
                source,
            }),
            _ => Err(GateFsError::Closed(self.path.clone())),
        }
    }

    /// Release the underlying file, if it was ever opened.
    ///
    /// Closing an unopened or already closed handle is a no-op, so a handle
    /// that was only stat'd can still be read later. Once an opened handle
    /// is closed, further reads fail instead of reopening.
    ///
    /// Never fails: `std::fs::File` releases its descriptor on drop and does
    /// not report close errors.
    pub fn close(&self) -> Result<()> {
        let mut state = self.state.lock();
        if matches!(*state, FileState::Opened(_)) {
            drop(mem::replace(&mut *state, FileState::Closed));
            debug!(path = %self.path.display(), "closed registered file");
        }
        Ok(())
    }
}

impl Read for &LazyFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        LazyFile::read(*self, buf).map_err(io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(content: &[u8]) -> (LazyFile, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, content).unwrap();
        (LazyFile::new(path), dir)
    }

    #[test]
    fn test_sequential_reads_share_one_open() {
        let content: Vec<u8> = (0..100).collect();
        let (file, _dir) = setup(&content);

        let mut buf = [0u8; 10];
        for chunk in content.chunks(10).take(3) {
            assert_eq!(file.read(&mut buf).unwrap(), 10);
            assert_eq!(&buf, chunk);
        }
        assert_eq!(file.status(), FileStatus::Opened);
    }

    #[test]
    fn test_open_is_deferred_until_read() {
        let (file, dir) = setup(b"late");
        assert_eq!(file.status(), FileStatus::Unopened);

        // Removing the file before the first read surfaces as an open error.
        fs::remove_file(dir.path().join("data.bin")).unwrap();
        let mut buf = [0u8; 4];
        let err = file.read(&mut buf).unwrap_err();
        assert!(matches!(err, GateFsError::Open { .. }));
        assert_eq!(file.status(), FileStatus::Unopened);
    }

    #[test]
    fn test_opened_file_survives_unlink() {
        let (file, dir) = setup(b"hello world");
        let mut buf = [0u8; 6];
        assert_eq!(file.read(&mut buf).unwrap(), 6);

        fs::remove_file(dir.path().join("data.bin")).unwrap();
        let mut rest = Vec::new();
        (&file).read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"world");
    }

    #[test]
    fn test_stat_does_not_open() {
        let (file, _dir) = setup(b"twelve bytes");
        assert_eq!(file.stat().unwrap().len(), 12);
        assert_eq!(file.status(), FileStatus::Unopened);
    }

    #[test]
    fn test_stat_reflects_disk_changes() {
        let (file, _dir) = setup(b"abc");
        assert_eq!(file.stat().unwrap().len(), 3);
        fs::write(file.path(), b"abcdef").unwrap();
        assert_eq!(file.stat().unwrap().len(), 6);

        fs::remove_file(file.path()).unwrap();
        assert!(matches!(file.stat(), Err(GateFsError::Stat { .. })));
    }

    #[test]
    fn test_close_without_read_is_noop() {
        let (file, _dir) = setup(b"unused");
        file.close().unwrap();
        file.close().unwrap();
        assert_eq!(file.status(), FileStatus::Unopened);

        let mut content = String::new();
        (&file).read_to_string(&mut content).unwrap();
        assert_eq!(content, "unused");
        assert_eq!(file.status(), FileStatus::Opened);
    }

    #[test]
    fn test_close_twice() {
        let (file, _dir) = setup(b"abc");
        let mut buf = [0u8; 1];
        file.read(&mut buf).unwrap();
        file.close().unwrap();
        file.close().unwrap();
        assert_eq!(file.status(), FileStatus::Closed);
    }

    #[test]
    fn test_read_after_close_does_not_reopen() {
        let (file, _dir) = setup(b"abc");
        let mut buf = [0u8; 1];
        file.read(&mut buf).unwrap();
        file.close().unwrap();

        let err = file.read(&mut buf).unwrap_err();
        assert!(matches!(err, GateFsError::Closed(_)));

        let mut reader = &file;
        let io_err = Read::read(&mut reader, &mut buf).unwrap_err();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }
}
