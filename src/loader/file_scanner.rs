//! File scanning utilities for discovering asset documents

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

pub struct FileScanner;

impl FileScanner {
    /// Check if a file has a supported extension (case-insensitive)
    pub fn is_supported_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Recursively scan a directory for supported files, sorted by path.
    ///
    /// A missing directory contributes no files.
    pub fn scan_directory(dir: &Path) -> Vec<PathBuf> {
        if !dir.is_dir() {
            debug!("Search path {dir:?} does not exist, skipping");
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry under {dir:?}: {e}");
                    None
                }
            })
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && Self::is_supported_file(path))
            .collect();

        files.sort();
        files
    }

    /// Scan every search path in order, concatenating the sorted results
    pub fn scan_search_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .flat_map(|dir| Self::scan_directory(dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_supported_file() {
        assert!(FileScanner::is_supported_file(Path::new("a.yaml")));
        assert!(FileScanner::is_supported_file(Path::new("a.YML")));
        assert!(FileScanner::is_supported_file(Path::new("dir/a.Json")));
        assert!(!FileScanner::is_supported_file(Path::new("a.txt")));
        assert!(!FileScanner::is_supported_file(Path::new("yaml")));
        assert!(!FileScanner::is_supported_file(Path::new("a.yaml.bak")));
    }

    #[test]
    fn test_unsupported_files_only_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("rule.toml"), "x").unwrap();
        fs::create_dir(temp_dir.path().join("nested.yaml")).unwrap();
        fs::write(temp_dir.path().join("nested.yaml").join("README"), "x").unwrap();

        assert!(FileScanner::scan_directory(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(FileScanner::scan_directory(&missing).is_empty());
    }

    #[test]
    fn test_recursive_scan_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::write(root.join("c.json"), "{}").unwrap();
        fs::write(root.join("b/inner/z.yml"), "{}").unwrap();
        fs::write(root.join("a.YAML"), "{}").unwrap();
        fs::write(root.join("b/skip.md"), "").unwrap();

        let files = FileScanner::scan_directory(root);
        assert_eq!(
            files,
            vec![
                root.join("a.YAML"),
                root.join("b/inner/z.yml"),
                root.join("c.json")
            ]
        );
    }

    #[test]
    fn test_search_paths_keep_declaration_order() {
        let temp_dir = TempDir::new().unwrap();
        let core = temp_dir.path().join("core");
        let extensions = temp_dir.path().join("extensions");
        fs::create_dir_all(&core).unwrap();
        fs::create_dir_all(&extensions).unwrap();
        fs::write(core.join("z.yaml"), "{}").unwrap();
        fs::write(extensions.join("a.yaml"), "{}").unwrap();

        let files = FileScanner::scan_search_paths(&[core.clone(), extensions.clone()]);
        assert_eq!(files, vec![core.join("z.yaml"), extensions.join("a.yaml")]);
    }
}
