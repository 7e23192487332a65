//! Directory tree walking logic
//!
//! The walker descends a root depth-first, tests each directory for a
//! metadata marker and hands matches to a [`MatchSink`] as they are found.
//! Hidden entries (including every `.meta` container) are never entered.

mod config;
mod matches;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use matches::{MatchSet, WalkReport};
pub use traversal::{DirectoryEntry, has_marker, read_entries};
pub use utils::{glob_match, is_hidden, should_prune};
pub use walker::{MatchSink, NullSink, TreeWalker};
