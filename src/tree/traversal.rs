//! Filesystem primitives used by the walker: listing children and testing
//! marker existence. Both fail softly below the root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::query::MarkerPath;

/// A node produced while listing a directory.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    /// From the entry's own file type; symlinks are never directories here.
    pub is_dir: bool,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: fs::DirEntry) -> Self {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        Self {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir,
        }
    }
}

/// List the children of `path`, in listing order unless `sort` is set.
///
/// Entries that fail to read individually are dropped.
pub fn read_entries(path: &Path, sort: bool) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    if sort {
        entries.sort_by_key(|a| a.file_name());
    }
    Ok(entries
        .into_iter()
        .map(DirectoryEntry::from_dir_entry)
        .collect())
}

/// Whether `dir` holds `marker`. Any stat error counts as absent.
pub fn has_marker(dir: &Path, marker: &MarkerPath) -> bool {
    let candidate = marker.within(dir);
    match candidate.try_exists() {
        Ok(found) => {
            trace!(path = %candidate.display(), found, "tested marker");
            found
        }
        Err(err) => {
            debug!(path = %candidate.display(), error = %err, "marker check failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CONTAINER, compile};
    use tempfile::TempDir;

    #[test]
    fn test_read_entries_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        let entries = read_entries(dir.path(), true).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c.txt"]);
        assert!(entries[0].is_dir);
        assert!(entries[1].is_dir);
        assert!(!entries[2].is_dir);
    }

    #[test]
    fn test_read_entries_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(read_entries(&dir.path().join("missing"), false).is_err());
    }

    #[test]
    fn test_has_marker_file_or_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".meta/Asset.class")).unwrap();
        fs::write(dir.path().join(".meta/Shot.id"), "").unwrap();

        assert!(has_marker(dir.path(), &compile(".Asset", CONTAINER)));
        assert!(has_marker(dir.path(), &compile("#Shot", CONTAINER)));
        assert!(!has_marker(dir.path(), &compile(".Shot", CONTAINER)));
        assert!(!has_marker(dir.path(), &compile("#Asset", CONTAINER)));
    }

    #[test]
    fn test_has_marker_without_container() {
        let dir = TempDir::new().unwrap();
        assert!(!has_marker(dir.path(), &compile(".Asset", CONTAINER)));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_dir_is_not_a_directory_entry() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = read_entries(dir.path(), true).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(!link.is_dir);
    }
}
