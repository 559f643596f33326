//! Artifact store abstraction
//!
//! The loader resolves artifacts through this seam, so the fallback policy
//! can be exercised against a fake store in tests.

use spamcheck_core::Result;
use std::path::{Path, PathBuf};

/// Read-only store of serialized artifacts, addressed by key.
pub trait ArtifactStore: Send + Sync {
    /// Check whether an artifact exists for the given key.
    fn exists(&self, key: &str) -> bool;

    /// Read the raw bytes of the artifact at the given key.
    fn read(&self, key: &str) -> Result<Vec<u8>>;
}

/// Filesystem-backed artifact store rooted at a models directory.
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    /// Create a store resolving keys under the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl ArtifactStore for FsArtifactStore {
    fn exists(&self, key: &str) -> bool {
        self.resolve(key).is_file()
    }

    fn read(&self, key: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.resolve(key))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_and_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vectorizer.json"), b"{}").unwrap();

        let store = FsArtifactStore::new(dir.path());
        assert!(store.exists("vectorizer.json"));
        assert!(!store.exists("classifier.json"));
        assert_eq!(store.read("vectorizer.json").unwrap(), b"{}");
    }

    #[test]
    fn test_read_missing_key_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());

        let err = store.read("missing.json").unwrap_err();
        assert!(matches!(err, spamcheck_core::Error::Io(_)));
    }

    #[test]
    fn test_directory_is_not_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("model.json")).unwrap();

        let store = FsArtifactStore::new(dir.path());
        assert!(!store.exists("model.json"));
    }
}
