//! Atomic whole-file replacement.
//!
//! Each write goes to a sibling temp file, is fsynced, then renamed over the
//! target under an exclusive lock, so readers see either the old or the new
//! snapshot and never a torn one.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

/// A handle to a file that is always replaced as a whole.
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the whole file; a missing file is `None`.
    pub fn load(&self) -> Result<Option<Vec<u8>>, AtomicFileError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the file contents atomically.
    pub fn save(&self, data: &[u8]) -> Result<(), AtomicFileError> {
        let (dir, tmp_path) = self.sibling_paths()?;
        fs::create_dir_all(dir)?;

        let _guard = LockGuard::acquire(&self.path)?;

        let mut staged = File::create(&tmp_path)?;
        staged.write_all(data)?;
        staged.sync_all()?;
        drop(staged);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Deletes the file. Deleting a missing file succeeds.
    pub fn remove(&self) -> Result<(), AtomicFileError> {
        if !self.path.exists() {
            return Ok(());
        }

        let _guard = LockGuard::acquire(&self.path)?;
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Parent directory and the hidden staging file beside the target.
    fn sibling_paths(&self) -> Result<(&Path, PathBuf), AtomicFileError> {
        let invalid = |what: &str| {
            AtomicFileError::IoError(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("{:?} has no {}", self.path, what),
            ))
        };

        let dir = self.path.parent().ok_or_else(|| invalid("parent directory"))?;
        let name = self.path.file_name().ok_or_else(|| invalid("file name"))?;
        Ok((dir, dir.join(format!(".{}.tmp", name.to_string_lossy()))))
    }
}

/// Exclusive advisory lock on `<stem>.lock` next to the target, released
/// when the guard drops.
///
/// The lock file itself is left in place: deleting it would let a later
/// writer lock a fresh inode while an earlier one still holds the old.
struct LockGuard {
    _handle: File,
}

impl LockGuard {
    fn acquire(target: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = target.with_extension("lock");
        let handle = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            handle
                .lock_exclusive()
                .map_err(|e| AtomicFileError::LockError(format!("{:?}: {}", lock_path, e)))?;
        }

        Ok(Self { _handle: handle })
    }
}
