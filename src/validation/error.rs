//! Findings produced by a validation run

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where in the asset tree a finding originated: a file, optionally narrowed
/// to a bracketed segment such as a list index (`rules.yaml[2]`) or a suite
/// element (`core_suite.json[expectations/0]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    pub path: PathBuf,
    pub segment: Option<String>,
}

impl SourceLocator {
    pub fn file(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            segment: None,
        }
    }

    pub fn element(path: &Path, index: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            segment: Some(index.to_string()),
        }
    }

    pub fn suite_expectation(path: &Path, index: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            segment: Some(format!("expectations/{index}")),
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.segment {
            Some(segment) => write!(f, "{}[{segment}]", self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Target-fatal: the target's schema file does not exist
    #[error("Missing schema file: {}", .path.display())]
    SchemaMissing { path: PathBuf },

    /// Target-fatal: the schema file could not be read or is not valid JSON
    #[error("Unable to parse schema {}: {reason}", .path.display())]
    SchemaUnreadable { path: PathBuf, reason: String },

    /// Target-fatal: the schema is JSON but not a usable JSON Schema
    #[error("Unable to compile schema {}: {reason}", .path.display())]
    SchemaInvalid { path: PathBuf, reason: String },

    /// File-fatal: the document could not be read or parsed
    #[error("{}: unable to parse document: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("{locator}: expected {expected}, got {observed}.")]
    Structural {
        locator: SourceLocator,
        expected: &'static str,
        observed: &'static str,
    },

    #[error("{locator}: {pointer} {message}")]
    SchemaViolation {
        locator: SourceLocator,
        pointer: String,
        message: String,
    },

    #[error("{locator}: {message}")]
    SuiteShape {
        locator: SourceLocator,
        message: String,
    },
}

impl ValidationError {
    /// Whether this error caused a whole target to be skipped
    pub fn is_target_fatal(&self) -> bool {
        matches!(
            self,
            ValidationError::SchemaMissing { .. }
                | ValidationError::SchemaUnreadable { .. }
                | ValidationError::SchemaInvalid { .. }
        )
    }
}

/// Advisory findings; only fail a run in strict-reference mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("Referenced rule ID not found in rules/core or rules/extensions: {0}")]
    UnknownRuleReference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_display() {
        let path = Path::new("rules/core/a.yaml");
        assert_eq!(SourceLocator::file(path).to_string(), "rules/core/a.yaml");
        assert_eq!(
            SourceLocator::element(path, 3).to_string(),
            "rules/core/a.yaml[3]"
        );
        assert_eq!(
            SourceLocator::suite_expectation(Path::new("s.json"), 0).to_string(),
            "s.json[expectations/0]"
        );
    }

    #[test]
    fn test_messages() {
        let structural = ValidationError::Structural {
            locator: SourceLocator::element(Path::new("r.yaml"), 1),
            expected: "object",
            observed: "string",
        };
        assert_eq!(structural.to_string(), "r.yaml[1]: expected object, got string.");

        let violation = ValidationError::SchemaViolation {
            locator: SourceLocator::file(Path::new("d.yaml")),
            pointer: "$/rules/0".to_string(),
            message: "\"rule_id\" is a required property".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "d.yaml: $/rules/0 \"rule_id\" is a required property"
        );

        let missing = ValidationError::SchemaMissing {
            path: PathBuf::from("schemas/rule-schema.json"),
        };
        assert_eq!(missing.to_string(), "Missing schema file: schemas/rule-schema.json");
        assert!(missing.is_target_fatal());
        assert!(!violation.is_target_fatal());
    }

    #[test]
    fn test_warning_message() {
        let warning = ValidationWarning::UnknownRuleReference("R9".to_string());
        assert_eq!(
            warning.to_string(),
            "Referenced rule ID not found in rules/core or rules/extensions: R9"
        );
    }
}
