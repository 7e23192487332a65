//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directories at this depth are tested but not descended (root is depth 0).
    pub max_depth: Option<usize>,
    /// Child names matching any of these globs are pruned like hidden entries.
    pub ignore_patterns: Vec<String>,
    /// Visit children in file-name order instead of directory-listing order.
    pub sort_entries: bool,
}
