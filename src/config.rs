//! Run configuration shared by the CLI and the library entry points

use std::path::{Path, PathBuf};

/// Settings for a single validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root of the asset tree (contains `schemas/`, `rules/`, `integrations/`)
    pub project_root: PathBuf,

    /// Escalate unknown rule references from warnings to a failing exit status
    pub strict_references: bool,
}

impl RunConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: resolve_root(&project_root.into()),
            strict_references: false,
        }
    }

    pub fn with_strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }
}

/// Canonicalize the root when it exists; a missing root is kept as given so
/// every target still reports its missing schema.
fn resolve_root(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_canonicalizes_existing_root() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a");
        std::fs::create_dir(&nested).unwrap();

        let config = RunConfig::new(nested.join(".."));
        assert_eq!(config.project_root, temp_dir.path().canonicalize().unwrap());
        assert!(!config.strict_references);
    }

    #[test]
    fn test_missing_root_is_kept_verbatim() {
        let config = RunConfig::new("does/not/exist").with_strict_references(true);
        assert_eq!(config.project_root, PathBuf::from("does/not/exist"));
        assert!(config.strict_references);
    }
}
