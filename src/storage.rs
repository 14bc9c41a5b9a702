//! Keyed blob persistence for the birthday store.
//!
//! The store persists its whole collection as a single keyed blob, in the
//! manner of a mobile key-value store. [`BlobStore`] is the seam: the
//! production [`FileStore`] keeps one JSON file per key under a data
//! directory, while [`MemoryStore`] backs tests and sample runs with a
//! shared in-memory map.

use crate::errors::Result;
use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};
use tracing::debug;

/// A keyed blob store: read whole values, write whole values.
///
/// `read` distinguishes "key absent" (`Ok(None)`) from a real I/O failure
/// so callers can treat a fresh install differently from a broken disk.
pub trait BlobStore {
    /// Reads the blob stored under `key`, or `None` if nothing was ever
    /// written there.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// File-backed blob store: one `<key>.json` file per key under a root
/// directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. No filesystem access happens
    /// until the first read or write.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// The directory this store reads and writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No blob at {:?}, treating as empty", path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.blob_path(key), bytes)?;
        Ok(())
    }
}

/// In-memory blob store for tests and sample runs.
///
/// Clones share the same underlying map, so a test can keep a handle to
/// the store it handed the `BirthdayStore` and inspect what was persisted.
/// A write counter supports asserting batch-persist behavior.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    blobs: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The blob currently stored under `key`, if any.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.borrow().blobs.get(key).cloned()
    }

    /// Pre-loads a blob, e.g. corrupted bytes for decode-failure tests.
    pub fn preload(&self, key: &str, bytes: Vec<u8>) {
        self.inner.borrow_mut().blobs.insert(key.to_string(), bytes);
    }

    /// Number of writes performed since creation.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.inner.borrow().blobs.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.blobs.insert(key.to_string(), bytes.to_vec());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        assert!(store.read("birthdays").unwrap().is_none());

        store.write("birthdays", b"[1,2,3]").unwrap();
        assert_eq!(
            store.read("birthdays").unwrap(),
            Some(b"[1,2,3]".to_vec())
        );

        // Overwrite replaces the whole blob
        store.write("birthdays", b"[]").unwrap();
        assert_eq!(store.read("birthdays").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.write("a", b"aaa").unwrap();
        store.write("b", b"bbb").unwrap();
        assert_eq!(store.read("a").unwrap(), Some(b"aaa".to_vec()));
        assert_eq!(store.read("b").unwrap(), Some(b"bbb".to_vec()));
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.write("k", b"v").unwrap();
        assert_eq!(handle.read("k").unwrap(), Some(b"v".to_vec()));
        assert_eq!(handle.snapshot("k"), Some(b"v".to_vec()));
        assert_eq!(handle.write_count(), 1);
    }
}
