use jsonschema::Validator;
use serde_json::Value;
use std::path::Path;

use super::error::{SourceLocator, ValidationError};
use super::path::InstancePath;
use super::schemas::load_schema;
use crate::loader::{Document, Payload, json_type_name};

/// Applies one target's compiled schema to parsed documents.
///
/// Never fails: every outcome is a (possibly empty) list of errors, with
/// schema violations ordered by their instance path.
pub struct SchemaChecker {
    validator: Validator,
}

impl SchemaChecker {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn from_path(schema_path: &Path) -> Result<Self, ValidationError> {
        load_schema(schema_path).map(Self::new)
    }

    pub fn check_document(&self, document: &Document) -> Vec<ValidationError> {
        let path = document.source_path.as_path();

        match document.shape() {
            Payload::List(items) => items
                .iter()
                .enumerate()
                .flat_map(|(index, item)| {
                    let locator = SourceLocator::element(path, index);
                    match item {
                        Value::Object(_) => self.check_object(item, locator),
                        other => vec![ValidationError::Structural {
                            locator,
                            expected: "object",
                            observed: json_type_name(other),
                        }],
                    }
                })
                .collect(),
            Payload::Object(_) => self.check_object(&document.payload, SourceLocator::file(path)),
            Payload::Other(value) => vec![ValidationError::Structural {
                locator: SourceLocator::file(path),
                expected: "object or list",
                observed: json_type_name(value),
            }],
        }
    }

    fn check_object(&self, instance: &Value, locator: SourceLocator) -> Vec<ValidationError> {
        let mut violations: Vec<(InstancePath, String)> = self
            .validator
            .iter_errors(instance)
            .map(|error| {
                let path =
                    InstancePath::from_json_pointer(&error.instance_path.to_string(), instance);
                (path, error.to_string())
            })
            .collect();

        // Stable, so equal paths keep the engine's order
        violations.sort_by(|a, b| a.0.cmp(&b.0));

        violations
            .into_iter()
            .map(|(path, message)| ValidationError::SchemaViolation {
                locator: locator.clone(),
                pointer: path.pointer(),
                message,
            })
            .collect()
    }
}
