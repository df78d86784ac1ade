//! Cross-document rule ID integrity

use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

use super::error::ValidationWarning;
use crate::targets::TargetKind;

/// Rule IDs declared by rule definitions and rule IDs referenced elsewhere.
///
/// Both sets only grow during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSets {
    pub known: BTreeSet<String>,
    pub referenced: BTreeSet<String>,
}

impl IdentifierSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect identifiers from one document produced by a target of `kind`
    pub fn record(&mut self, kind: TargetKind, payload: &Value) {
        match kind {
            TargetKind::RuleDefinitions => {
                let ids = extract_rule_ids(payload);
                debug!("    declares {} rule ID(s)", ids.len());
                self.known.extend(ids);
            }
            TargetKind::DatasetConfigs | TargetKind::SemanticTypes => {
                let refs = extract_referenced_rule_ids(payload);
                debug!("    references {} rule ID(s)", refs.len());
                self.referenced.extend(refs);
            }
        }
    }

    pub fn merge(&mut self, other: IdentifierSets) {
        self.known.extend(other.known);
        self.referenced.extend(other.referenced);
    }

    /// Referenced IDs with no declaring rule definition, sorted
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.referenced.difference(&self.known).map(String::as_str)
    }

    pub fn warnings(&self) -> Vec<ValidationWarning> {
        self.missing()
            .map(|id| ValidationWarning::UnknownRuleReference(id.to_string()))
            .collect()
    }
}

fn rule_id_of(value: &Value) -> Option<&str> {
    value.as_object()?.get("rule_id")?.as_str()
}

/// `rule_id` of a rule object, or of every object in a list of rules
pub fn extract_rule_ids(payload: &Value) -> BTreeSet<String> {
    match payload {
        Value::Object(_) => rule_id_of(payload).map(str::to_string).into_iter().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(rule_id_of)
            .map(str::to_string)
            .collect(),
        _ => BTreeSet::new(),
    }
}

/// IDs referenced by a dataset config or semantic type: `rules[*].rule_id`
/// for object entries plus every string entry of `default_rules`
pub fn extract_referenced_rule_ids(payload: &Value) -> BTreeSet<String> {
    let Some(map) = payload.as_object() else {
        return BTreeSet::new();
    };

    let explicit = map
        .get("rules")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(rule_id_of);

    let defaults = map
        .get("default_rules")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);

    explicit.chain(defaults).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rule_ids_from_list() {
        let payload = json!([{"rule_id": "R1"}, {"rule_id": "R2"}, {"rule_id": 3}, "R4", {}]);
        assert_eq!(extract_rule_ids(&payload), set(&["R1", "R2"]));
    }

    #[test]
    fn test_rule_id_from_object() {
        assert_eq!(extract_rule_ids(&json!({"rule_id": "R1"})), set(&["R1"]));
        assert!(extract_rule_ids(&json!({"rule_id": null})).is_empty());
        assert!(extract_rule_ids(&json!("R1")).is_empty());
    }

    #[test]
    fn test_referenced_ids_from_both_shapes() {
        let payload = json!({
            "rules": [{"rule_id": "R1"}, "R2", {"rule_id": 7}, {"name": "x"}],
            "default_rules": ["R3", {"rule_id": "R4"}, 5]
        });
        assert_eq!(extract_referenced_rule_ids(&payload), set(&["R1", "R3"]));
    }

    #[test]
    fn test_referenced_ids_ignore_non_objects() {
        assert!(extract_referenced_rule_ids(&json!([{"rules": [{"rule_id": "R1"}]}])).is_empty());
        assert!(extract_referenced_rule_ids(&json!({"rules": "R1"})).is_empty());
    }

    #[test]
    fn test_record_by_target_kind() {
        let mut ids = IdentifierSets::new();
        ids.record(
            TargetKind::RuleDefinitions,
            &json!([{"rule_id": "R1"}, {"rule_id": "R2"}]),
        );
        ids.record(TargetKind::DatasetConfigs, &json!({"rules": [{"rule_id": "R9"}]}));
        ids.record(TargetKind::SemanticTypes, &json!({"default_rules": ["R1"]}));

        assert_eq!(ids.known, set(&["R1", "R2"]));
        assert_eq!(ids.referenced, set(&["R1", "R9"]));
        assert_eq!(ids.missing().collect::<Vec<_>>(), vec!["R9"]);
        assert_eq!(
            ids.warnings(),
            vec![ValidationWarning::UnknownRuleReference("R9".to_string())]
        );
    }

    #[test]
    fn test_missing_is_sorted_and_merge_is_union() {
        let mut ids = IdentifierSets::new();
        ids.referenced = set(&["b", "a", "c"]);
        let mut other = IdentifierSets::new();
        other.known = set(&["b"]);
        other.referenced = set(&["d"]);
        ids.merge(other);

        assert_eq!(ids.missing().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }
}
