//! Testing utilities for pricetag
//!
//! `TestStore` gives a test its own temporary directory holding a store file
//! and any files it wants to tag. Everything is removed when it is dropped.
//!
//! Only available when compiled with `cfg(test)`.

use crate::db::{Database, store};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with a store file path inside it
pub struct TestStore {
    dir: TempDir,
    store_path: PathBuf,
}

impl TestStore {
    /// Create an empty test directory; the store file does not exist yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store_path = dir.path().join(store::STORE_FILENAME);
        Self { dir, store_path }
    }

    /// Directory holding the store and test files
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the store file
    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Create `name` inside the test directory with some content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "test content").expect("Failed to write test file");
        path
    }

    /// Load the store
    ///
    /// # Panics
    /// Panics if the store is corrupt or unreadable.
    #[must_use]
    pub fn load(&self) -> Database {
        store::load(&self.store_path).expect("Failed to load test store")
    }

    /// Save `db` to the store
    ///
    /// # Panics
    /// Panics if the store cannot be written.
    pub fn save(&self, db: &Database) {
        store::save(db, &self.store_path).expect("Failed to save test store");
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
