use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ValidationError;

/// Resolves `$ref`s to sibling schema files on disk, without network access.
///
/// Only the last path segment of the reference is used, so both
/// `./common.json` and `https://example.org/schemas/common.json` map to
/// `<schema dir>/common.json`.
pub struct SchemaRetriever {
    schema_dir: PathBuf,
}

impl SchemaRetriever {
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
        }
    }

    fn file_for(&self, uri: &str) -> Option<PathBuf> {
        let without_fragment = uri.split('#').next().unwrap_or("");
        let without_query = without_fragment.split('?').next().unwrap_or("");
        let file_name = without_query.rsplit('/').next()?;
        if file_name.is_empty() {
            return None;
        }
        let candidate = self.schema_dir.join(file_name);
        candidate.is_file().then_some(candidate)
    }
}

impl Retrieve for SchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<String>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let Some(path) = self.file_for(uri.as_str()) else {
            return Err(format!("Unknown schema URI: {uri}").into());
        };
        debug!("Resolving {uri} from {path:?}");
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Read, parse and compile a target's schema (JSON Schema Draft 2020-12).
///
/// Any failure is target-fatal and comes back as one of the schema variants
/// of [`ValidationError`].
pub fn load_schema(schema_path: &Path) -> Result<Validator, ValidationError> {
    if !schema_path.is_file() {
        return Err(ValidationError::SchemaMissing {
            path: schema_path.to_path_buf(),
        });
    }

    let unreadable = |reason: String| ValidationError::SchemaUnreadable {
        path: schema_path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(schema_path).map_err(|e| unreadable(e.to_string()))?;
    let schema: Value = serde_json::from_str(&content).map_err(|e| unreadable(e.to_string()))?;

    let schema_dir = schema_path.parent().unwrap_or_else(|| Path::new("."));
    jsonschema::draft202012::options()
        .with_retriever(SchemaRetriever::new(schema_dir))
        .build(&schema)
        .map_err(|e| ValidationError::SchemaInvalid {
            path: schema_path.to_path_buf(),
            reason: e.to_string(),
        })
}
