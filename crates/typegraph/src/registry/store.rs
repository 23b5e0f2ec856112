// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte storage behind the registry.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing stored at this path.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Whole-file byte access.
pub trait ByteStore {
    /// Read a file; a missing file is [`StoreError::NotFound`].
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError>;

    /// Create or replace a file, creating parent directories as needed.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError>;

    /// Remove a file; removing a missing file succeeds.
    fn remove_file(&self, path: &Path) -> Result<(), StoreError>;
}

/// Local filesystem store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl ByteStore for FsStore {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        fs::read(path).map_err(|e| StoreError::from_io(path, e))
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(path, bytes).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn remove_file(&self, path: &Path) -> Result<(), StoreError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored paths in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().keys().cloned().collect()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.lock().contains_key(path)
    }
}

impl ByteStore for MemoryStore {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        self.files
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_path_buf()))
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        self.files.lock().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), StoreError> {
        self.files.lock().remove(path);
        Ok(())
    }
}

impl<S: ByteStore + ?Sized> ByteStore for &S {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        (**self).read_bytes(path)
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).write_bytes(path, bytes)
    }

    fn remove_file(&self, path: &Path) -> Result<(), StoreError> {
        (**self).remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app").join("config.bin");
        let store = FsStore;

        assert!(matches!(store.read_bytes(&path), Err(StoreError::NotFound(_))));
        store.write_bytes(&path, b"abc").expect("write");
        assert_eq!(store.read_bytes(&path).expect("read"), b"abc");

        store.remove_file(&path).expect("remove");
        store.remove_file(&path).expect("remove missing");
        assert!(!path.exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        let path = Path::new("app/config.bin");

        assert!(matches!(store.read_bytes(path), Err(StoreError::NotFound(_))));
        store.write_bytes(path, &[1, 2, 3]).expect("write");
        assert!(store.contains(path));
        assert_eq!(store.paths(), vec![PathBuf::from("app/config.bin")]);

        store.remove_file(path).expect("remove");
        assert!(store.paths().is_empty());
    }
}
