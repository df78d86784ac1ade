//! Shared path display helpers

use std::path::Path;

/// Show `path` relative to the project root when it lives under it
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
