//! The fixed set of validation targets and the locations they cover

use std::path::{Path, PathBuf};

/// Asset category a target validates; decides how identifiers are extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    RuleDefinitions,
    DatasetConfigs,
    SemanticTypes,
}

impl TargetKind {
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::RuleDefinitions => "rule definitions",
            TargetKind::DatasetConfigs => "dataset configs",
            TargetKind::SemanticTypes => "semantic types",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTarget {
    pub kind: TargetKind,
    pub schema_path: PathBuf,
    pub search_paths: Vec<PathBuf>,
}

impl ValidationTarget {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Location of the optional expectation suite, relative to the project root
pub const SUITE_PATH: [&str; 4] = [
    "integrations",
    "great_expectations",
    "suites",
    "core_suite.json",
];

/// All targets under `root`, in the order they are validated.
///
/// Rule definitions come first so that every known rule ID has been
/// collected before references are diffed.
pub fn default_targets(root: &Path) -> Vec<ValidationTarget> {
    let schemas = root.join("schemas");
    let rules = root.join("rules");

    vec![
        ValidationTarget {
            kind: TargetKind::RuleDefinitions,
            schema_path: schemas.join("rule-schema.json"),
            search_paths: vec![rules.join("core"), rules.join("extensions")],
        },
        ValidationTarget {
            kind: TargetKind::DatasetConfigs,
            schema_path: schemas.join("dataset-config-schema.json"),
            search_paths: vec![rules.join("datasets")],
        },
        ValidationTarget {
            kind: TargetKind::SemanticTypes,
            schema_path: schemas.join("semantic-types-schema.json"),
            search_paths: vec![rules.join("semantic_types")],
        },
    ]
}

pub fn suite_path(root: &Path) -> PathBuf {
    SUITE_PATH.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}
