//! Shared utility functions for tree walking

use glob::Pattern;

/// Hidden entries start with a dot. This covers the metadata container itself.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check if an entry should be pruned based on its name and ignore patterns.
pub fn should_prune(name: &str, ignore_patterns: &[String]) -> bool {
    if is_hidden(name) {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
