use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::schema_check::SchemaChecker;
use super::suite::{check_suite_file, locate_suite};
use crate::error_utils::display_relative;
use crate::loader::{Document, FileScanner};
use crate::report::Findings;
use crate::targets::{ValidationTarget, default_targets};

/// Drives a full run: every target, then the suite, then the reference diff
pub struct Validator {
    root: PathBuf,
    targets: Vec<ValidationTarget>,
}

impl Validator {
    pub fn new(root: &Path) -> Self {
        Self::with_targets(root, default_targets(root))
    }

    pub fn with_targets(root: &Path, targets: Vec<ValidationTarget>) -> Self {
        Self {
            root: root.to_path_buf(),
            targets,
        }
    }

    pub fn validate_all(&self) -> Findings {
        let mut findings = Findings::new();

        for target in &self.targets {
            findings.merge(self.validate_target(target));
        }

        match locate_suite(&self.root) {
            Some(suite) => {
                info!("Checking expectation suite {}", display_relative(&self.root, &suite));
                findings.extend_errors(check_suite_file(&suite));
            }
            None => debug!("No expectation suite found, skipping"),
        }

        findings.resolve_references();
        findings
    }

    /// Validate every file of one target.
    ///
    /// A schema that cannot be loaded records one error and skips the target.
    pub fn validate_target(&self, target: &ValidationTarget) -> Findings {
        let mut findings = Findings::new();

        let checker = match SchemaChecker::from_path(&target.schema_path) {
            Ok(checker) => checker,
            Err(error) => {
                if error.is_target_fatal() {
                    info!("Skipping {}: {error}", target.name());
                }
                findings.push_error(error);
                return findings;
            }
        };

        let files = FileScanner::scan_search_paths(&target.search_paths);
        info!("[{}] files: {}", target.name(), files.len());

        for file in files {
            info!("  - validating {}", display_relative(&self.root, &file));

            let document = match Document::load(&file) {
                Ok(document) => document,
                Err(error) => {
                    debug!("    {error}");
                    findings.push_error(error);
                    continue;
                }
            };

            findings.extend_errors(checker.check_document(&document));
            findings.identifiers.record(target.kind, &document.payload);
        }

        findings
    }
}
