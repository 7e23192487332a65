//! Results of a single walk

use std::path::{Path, PathBuf};

/// Matching directories in the order the walk discovered them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet(Vec<PathBuf>);

impl MatchSet {
    pub fn push(&mut self, path: PathBuf) {
        self.0.push(path);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|p| p == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0
    }
}

impl IntoIterator for MatchSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything a walk produced: the matches plus traversal counters.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    pub matches: MatchSet,
    /// Directories tested for the marker, root included.
    pub dirs_visited: usize,
    /// Non-directory entries seen (files, symlinks, special files).
    pub files_visited: usize,
    /// Hidden or ignored entries skipped without being visited.
    pub pruned: usize,
    /// Subdirectories whose listing failed.
    pub unreadable: usize,
}
