//! Structural paths into documents and the `$`-rooted pointers built from them

use serde_json::Value;
use std::fmt;

/// One step into a document: an array index or an object key.
///
/// The derived order compares indices numerically and keys lexically; an
/// index sorts before a key at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathToken {
    Index(usize),
    Key(String),
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathToken::Index(index) => write!(f, "{index}"),
            PathToken::Key(key) => f.write_str(key),
        }
    }
}

/// A token sequence from a document root.
///
/// Ordering is element-wise; a strict prefix sorts before any longer path
/// that extends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstancePath(Vec<PathToken>);

impl InstancePath {
    pub fn new(tokens: Vec<PathToken>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[PathToken] {
        &self.0
    }

    /// Rebuild typed tokens from an RFC 6901 pointer by walking `instance`:
    /// a segment addressing an array is an index, anything else is a key.
    pub fn from_json_pointer(pointer: &str, instance: &Value) -> Self {
        let Some(rest) = pointer.strip_prefix('/') else {
            return Self::default();
        };

        let mut node = Some(instance);
        let mut tokens = Vec::new();
        for raw in rest.split('/') {
            let segment = raw.replace("~1", "/").replace("~0", "~");
            let token = match (node, segment.parse::<usize>()) {
                (Some(Value::Array(items)), Ok(index)) => {
                    node = items.get(index);
                    PathToken::Index(index)
                }
                (Some(Value::Object(map)), _) => {
                    node = map.get(&segment);
                    PathToken::Key(segment)
                }
                _ => {
                    node = None;
                    PathToken::Key(segment)
                }
            };
            tokens.push(token);
        }
        Self(tokens)
    }

    /// `$` followed by `/token` for each step
    pub fn pointer(&self) -> String {
        self.0
            .iter()
            .fold(String::from("$"), |pointer, token| format!("{pointer}/{token}"))
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pointer())
    }
}
