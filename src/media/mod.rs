//! Media blob storage behind a capability interface.
//!
//! The archive codec never touches the filesystem directly: it reads and
//! writes media blobs through the [`MediaStore`] trait. Production code uses
//! [`FsMediaStore`] rooted at the journal's media directory; tests (and
//! callers with no filesystem) use [`MemoryMediaStore`].

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Keyed blob storage read and written by id.
///
/// A missing blob is a soft condition (`Ok(None)`), not an error: the export
/// path silently skips media ids that do not resolve.
pub trait MediaStore {
    /// Reads the blob stored under `id`, or `None` if no such blob exists.
    fn read_blob(&self, id: &str) -> AppResult<Option<Vec<u8>>>;

    /// Writes `bytes` under `relative_path`, creating intermediate paths as
    /// needed and overwriting any existing blob.
    fn write_blob(&mut self, relative_path: &str, bytes: &[u8]) -> AppResult<()>;
}

/// Filesystem-backed media store rooted at a single directory.
///
/// Blob ids map to paths relative to the root. Ids that would escape the root
/// (absolute paths, `..` components) are rejected: blob names come out of
/// archives that may not be trustworthy.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsMediaStore { root: root.into() }
    }

    /// Resolves `id` against the root, rejecting ids that escape it.
    fn resolve(&self, id: &str) -> AppResult<PathBuf> {
        let relative = Path::new(id);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
        if id.is_empty() || escapes {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid media id: '{}'", id),
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl MediaStore for FsMediaStore {
    fn read_blob(&self, id: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.resolve(id)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Media blob not found: {}", id);
                Ok(None)
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn write_blob(&mut self, relative_path: &str, bytes: &[u8]) -> AppResult<()> {
        let path = self.resolve(relative_path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        debug!("Wrote media blob: {} ({} bytes)", relative_path, bytes.len());
        Ok(())
    }
}

/// In-memory media store backed by a `BTreeMap`.
///
/// Used as the test double for the codec and for callers that hold media
/// outside the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryMediaStore {
    blobs: BTreeMap<String, Vec<u8>>,
}

impl MemoryMediaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a blob directly, for test setup.
    pub fn insert(&mut self, id: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.blobs.insert(id.into(), bytes.into());
    }

    /// Number of blobs held.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl MediaStore for MemoryMediaStore {
    fn read_blob(&self, id: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.blobs.get(id).cloned())
    }

    fn write_blob(&mut self, relative_path: &str, bytes: &[u8]) -> AppResult<()> {
        self.blobs.insert(relative_path.to_string(), bytes.to_vec());
        Ok(())
    }
}
