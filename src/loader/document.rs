use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::validation::ValidationError;

/// Parser selected from a file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.json` (any case) is strict JSON, everything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A parsed asset file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub source_path: PathBuf,
    pub payload: Value,
}

/// Root shape of a document payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Object(&'a Map<String, Value>),
    List(&'a [Value]),
    Other(&'a Value),
}

impl<'a> From<&'a Value> for Payload<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Payload::Object(map),
            Value::Array(items) => Payload::List(items),
            other => Payload::Other(other),
        }
    }
}

impl Document {
    /// Read and parse `path`. Failures become a [`ValidationError::Parse`]
    /// so the caller can record it and move on to the next file.
    pub fn load(path: &Path) -> Result<Self, ValidationError> {
        let parse_error = |reason: String| ValidationError::Parse {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        let payload = Self::parse(&content, DocumentFormat::from_path(path))
            .map_err(parse_error)?;

        Ok(Self {
            source_path: path.to_path_buf(),
            payload,
        })
    }

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Value, String> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => Self::parse_yaml(content).map_err(|e| e.to_string()),
        }
    }

    /// YAML with `<<` merge keys folded into their mappings
    fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
        let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
        yaml.apply_merge()?;
        serde_yaml::from_value(yaml)
    }

    pub fn shape(&self) -> Payload<'_> {
        Payload::from(&self.payload)
    }
}

/// JSON type name of a value, as shown in structural errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
