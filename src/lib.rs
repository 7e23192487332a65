//! cquery - find directories by their Open Metadata markers

pub mod error;
pub mod logging;
pub mod output;
pub mod query;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::SearchError;
pub use output::{MatchPrinter, NO_RESULTS, OutputConfig};
pub use query::{CONTAINER, MarkerPath, Query, QueryKind, compile};
pub use tree::{MatchSet, MatchSink, NullSink, TreeWalker, WalkReport, WalkerConfig};

/// Compile `query` against the standard container and walk `root` for it.
pub fn search<S: MatchSink>(
    root: &std::path::Path,
    query: &str,
    config: WalkerConfig,
    sink: &mut S,
) -> error::Result<WalkReport> {
    let marker = compile(query, CONTAINER);
    TreeWalker::new(config).walk(root, &marker, sink)
}
