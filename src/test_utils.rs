//! Test utilities for creating temporary metadata trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::query::{CLASS_SUFFIX, CONTAINER, ID_SUFFIX};

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a directory and its parents.
    pub fn add_dir(&self, rel: &str) -> PathBuf {
        let full_path = self.join(rel);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a file, creating parent directories as needed.
    pub fn add_file(&self, rel: &str, content: &str) -> PathBuf {
        let full_path = self.join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Tag directory `rel` with class `name` (an empty marker file).
    pub fn add_class(&self, rel: &str, name: &str) -> PathBuf {
        self.add_marker(rel, &format!("{}{}", name, CLASS_SUFFIX))
    }

    /// Tag directory `rel` with id `name` (an empty marker file).
    pub fn add_id(&self, rel: &str, name: &str) -> PathBuf {
        self.add_marker(rel, &format!("{}{}", name, ID_SUFFIX))
    }

    /// Create `rel/.meta/marker` as an empty file.
    pub fn add_marker(&self, rel: &str, marker: &str) -> PathBuf {
        let container = self.join(rel).join(CONTAINER);
        fs::create_dir_all(&container).expect("Failed to create container");
        let full_path = container.join(marker);
        fs::write(&full_path, "").expect("Failed to write marker");
        full_path
    }

    /// Create `rel/.meta/marker` as an empty directory.
    pub fn add_marker_dir(&self, rel: &str, marker: &str) -> PathBuf {
        let full_path = self.join(rel).join(CONTAINER).join(marker);
        fs::create_dir_all(&full_path).expect("Failed to create marker dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
