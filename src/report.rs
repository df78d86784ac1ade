//! Run-scoped accumulation of findings and the final report

use crate::validation::{IdentifierSets, ValidationError, ValidationWarning};

/// Everything a run has found so far.
///
/// Threaded through target processing as an explicit accumulator; partial
/// results from separate runs combine with [`Findings::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub identifiers: IdentifierSets,
}

/// The four counts printed at the top of every report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub known_rule_ids: usize,
    pub referenced_rule_ids: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    pub fn merge(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.identifiers.merge(other.identifiers);
    }

    /// Turn unresolved rule references into warnings. Called once, after
    /// every target has contributed its identifiers.
    pub fn resolve_references(&mut self) {
        let warnings = self.identifiers.warnings();
        self.warnings.extend(warnings);
    }

    pub fn summary(&self) -> Summary {
        Summary {
            known_rule_ids: self.identifiers.known.len(),
            referenced_rule_ids: self.identifiers.referenced.len(),
            errors: self.errors.len(),
            warnings: self.warnings.len(),
        }
    }

    /// Errors always fail; warnings fail only in strict-reference mode
    pub fn outcome(&self, strict_references: bool) -> Outcome {
        if !self.errors.is_empty() || (strict_references && !self.warnings.is_empty()) {
            Outcome::Failed
        } else {
            Outcome::Passed
        }
    }

    pub fn render(&self, strict_references: bool) -> String {
        let summary = self.summary();
        let mut lines = vec![
            "Data Quality asset validation summary".to_string(),
            format!("- Known rule IDs: {}", summary.known_rule_ids),
            format!("- Referenced rule IDs: {}", summary.referenced_rule_ids),
            format!("- Errors: {}", summary.errors),
            format!("- Warnings: {}", summary.warnings),
        ];

        if !self.warnings.is_empty() {
            lines.push("\nWarnings:".to_string());
            lines.extend(self.warnings.iter().map(|warning| format!("- {warning}")));
        }

        if !self.errors.is_empty() {
            lines.push("\nErrors:".to_string());
            lines.extend(self.errors.iter().map(|error| format!("- {error}")));
        }

        if self.outcome(strict_references) == Outcome::Passed {
            lines.push("\nValidation passed.".to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
