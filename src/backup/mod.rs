//! Backup storage: a single fixed-slot byte sink/source for the archive.
//!
//! The slot holds at most one archive; saving overwrites whatever was there.
//! There is no versioning and no history. [`FileBackupStorage`] is the
//! production implementation; callers that need something else (cloud slot,
//! in-memory for tests) implement [`BackupStorage`] themselves.

use crate::errors::{AppError, AppResult};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::debug;

/// A single fixed-slot byte sink/source with overwrite semantics.
pub trait BackupStorage {
    /// Overwrites the slot with `bytes`.
    fn save(&mut self, bytes: &[u8]) -> AppResult<()>;

    /// Loads the slot's bytes, or `None` if the slot has never been written.
    fn load(&self) -> AppResult<Option<Vec<u8>>>;
}

/// Backup slot backed by a single file.
///
/// Saves are atomic: bytes go to a temp file in the slot's directory first
/// and are renamed over the slot, so a crash mid-save leaves the previous
/// backup intact. A sidecar `.lock` file serializes concurrent savers.
#[derive(Debug, Clone)]
pub struct FileBackupStorage {
    slot_path: PathBuf,
}

impl FileBackupStorage {
    /// Creates storage over the given slot path. Nothing is touched on disk
    /// until the first save.
    pub fn new(slot_path: impl Into<PathBuf>) -> Self {
        FileBackupStorage {
            slot_path: slot_path.into(),
        }
    }

    /// Path of the slot file.
    pub fn slot_path(&self) -> &PathBuf {
        &self.slot_path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .slot_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "backup".to_string());
        name.push_str(".lock");
        self.slot_path.with_file_name(name)
    }
}

impl BackupStorage for FileBackupStorage {
    fn save(&mut self, bytes: &[u8]) -> AppResult<()> {
        let parent = self.slot_path.parent().ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Backup slot has no parent directory: {:?}", self.slot_path),
            ))
        })?;
        fs::create_dir_all(parent)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;
        lock_file.lock_exclusive()?;

        // Temp file lives in the slot's directory so the rename stays on one
        // filesystem and is atomic.
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.slot_path)
            .map_err(|e| AppError::Io(e.error))?;

        lock_file.unlock()?;
        debug!("Saved {} bytes to backup slot {:?}", bytes.len(), self.slot_path);
        Ok(())
    }

    fn load(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.slot_path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_empty_slot_is_none() {
        let dir = tempdir().unwrap();
        let storage = FileBackupStorage::new(dir.path().join("backup.tar.gz"));
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut storage = FileBackupStorage::new(dir.path().join("backup.tar.gz"));

        storage.save(b"archive bytes").unwrap();
        assert_eq!(storage.load().unwrap(), Some(b"archive bytes".to_vec()));
    }

    #[test]
    fn test_save_overwrites_previous_backup() {
        let dir = tempdir().unwrap();
        let mut storage = FileBackupStorage::new(dir.path().join("backup.tar.gz"));

        storage.save(b"first").unwrap();
        storage.save(b"second").unwrap();
        assert_eq!(storage.load().unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("nested/deeper/backup.tar.gz");
        let mut storage = FileBackupStorage::new(&slot);

        storage.save(b"bytes").unwrap();
        assert!(slot.exists());
    }
}
