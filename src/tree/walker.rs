//! TreeWalker - depth-first search for directories holding a marker

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SearchError};
use crate::query::MarkerPath;

use super::config::WalkerConfig;
use super::matches::WalkReport;
use super::traversal::{DirectoryEntry, has_marker, read_entries};
use super::utils::should_prune;

/// Receives matches as soon as the walker finds them.
pub trait MatchSink {
    fn report_match(&mut self, path: &Path) -> io::Result<()>;
}

/// Sink that discards incremental reports.
pub struct NullSink;

impl MatchSink for NullSink {
    fn report_match(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

impl MatchSink for Vec<PathBuf> {
    fn report_match(&mut self, path: &Path) -> io::Result<()> {
        self.push(path.to_path_buf());
        Ok(())
    }
}

/// Pre-order walker. Hidden entries are pruned, symlinks are not followed,
/// and failures below the root only cut off the affected subtree.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and collect every directory that contains `marker`.
    pub fn walk<S: MatchSink>(
        &self,
        root: &Path,
        marker: &MarkerPath,
        sink: &mut S,
    ) -> Result<WalkReport> {
        let meta = fs::metadata(root).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SearchError::RootNotFound(root.to_path_buf())
            } else {
                SearchError::UnreadableRoot {
                    path: root.to_path_buf(),
                    source,
                }
            }
        })?;
        if !meta.is_dir() {
            return Err(SearchError::NotADirectory(root.to_path_buf()));
        }

        let entries = read_entries(root, self.config.sort_entries).map_err(|source| {
            SearchError::UnreadableRoot {
                path: root.to_path_buf(),
                source,
            }
        })?;

        info!(root = %root.display(), marker = %marker, "starting walk");

        let mut report = WalkReport::default();
        self.visit_dir(root, 0, entries, marker, sink, &mut report)?;

        info!(
            matches = report.matches.len(),
            dirs = report.dirs_visited,
            files = report.files_visited,
            pruned = report.pruned,
            unreadable = report.unreadable,
            "walk finished"
        );
        Ok(report)
    }

    fn visit_dir<S: MatchSink>(
        &self,
        path: &Path,
        depth: usize,
        entries: Vec<DirectoryEntry>,
        marker: &MarkerPath,
        sink: &mut S,
        report: &mut WalkReport,
    ) -> Result<()> {
        report.dirs_visited += 1;

        if has_marker(path, marker) {
            report.matches.push(path.to_path_buf());
            sink.report_match(path)?;
        }

        // Tested, but not descended
        if self.at_max_depth(depth) {
            return Ok(());
        }

        for entry in entries {
            if should_prune(&entry.name, &self.config.ignore_patterns) {
                debug!(path = %entry.path.display(), "pruned");
                report.pruned += 1;
                continue;
            }

            if !entry.is_dir {
                report.files_visited += 1;
                continue;
            }

            let children = if self.at_max_depth(depth + 1) {
                Vec::new()
            } else {
                match read_entries(&entry.path, self.config.sort_entries) {
                    Ok(children) => children,
                    Err(err) => {
                        debug!(path = %entry.path.display(), error = %err, "cannot list directory");
                        report.unreadable += 1;
                        Vec::new()
                    }
                }
            };

            self.visit_dir(&entry.path, depth + 1, children, marker, sink, report)?;
        }

        Ok(())
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}
