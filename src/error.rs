//! Error types for metadata queries

use std::io;
use std::path::PathBuf;

/// Conditions that stop a query from running at all.
///
/// Failures below the root are never reported here; an unreadable
/// subdirectory simply contributes no matches.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("cannot search '{}': Not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read '{}': {}", .path.display(), .source)]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
