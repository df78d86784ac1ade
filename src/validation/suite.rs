//! Shape check for the optional Great Expectations suite

use serde_json::Value;
use std::path::{Path, PathBuf};

use super::error::{SourceLocator, ValidationError};
use crate::targets::suite_path;

/// The suite file under `root`, if there is one
pub fn locate_suite(root: &Path) -> Option<PathBuf> {
    let path = suite_path(root);
    path.exists().then_some(path)
}

/// Parse the suite as JSON and collect every shape violation
pub fn check_suite_file(path: &Path) -> Vec<ValidationError> {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str::<Value>(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(payload) => check_suite_value(path, &payload),
        Err(reason) => vec![suite_error(
            SourceLocator::file(path),
            format!("invalid JSON: {reason}"),
        )],
    }
}

pub fn check_suite_value(path: &Path, payload: &Value) -> Vec<ValidationError> {
    let Some(suite) = payload.as_object() else {
        return vec![suite_error(SourceLocator::file(path), "expected object at root.")];
    };

    let mut errors = Vec::new();

    let has_name = suite
        .get("expectation_suite_name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !has_name {
        errors.push(suite_error(
            SourceLocator::file(path),
            "expectation_suite_name must be a non-empty string.",
        ));
    }

    match suite.get("expectations").and_then(Value::as_array) {
        None => errors.push(suite_error(
            SourceLocator::file(path),
            "expectations must be a list.",
        )),
        Some(expectations) => {
            for (index, item) in expectations.iter().enumerate() {
                let locator = SourceLocator::suite_expectation(path, index);
                match item.as_object() {
                    None => errors.push(suite_error(locator, "expected object.")),
                    Some(expectation) if !expectation.contains_key("expectation_type") => {
                        errors.push(suite_error(locator, "missing expectation_type field."))
                    }
                    Some(_) => {}
                }
            }
        }
    }

    errors
}

fn suite_error(locator: SourceLocator, message: impl Into<String>) -> ValidationError {
    ValidationError::SuiteShape {
        locator,
        message: message.into(),
    }
}
