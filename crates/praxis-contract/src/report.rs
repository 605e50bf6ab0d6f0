//! Validation violations and the collected report
//!
//! Violations are data, never panics: the validation pass collects every
//! failed rule and hands the full set back to the caller so the form can
//! highlight all invalid fields at once.

use crate::field::Field;
use serde::Serialize;

/// A single failed rule on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path the rule fired on
    pub field: Field,
    /// Human-readable message for per-field display
    pub message: &'static str,
}

impl FieldViolation {
    /// Create a violation
    #[inline]
    #[must_use]
    pub const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty set of violations for one record, in field declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("contract record failed validation with {n} violation(s)", n = .violations.len())]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// Build a report from collected violations
    ///
    /// Callers pass a non-empty set; the single producer is the rule pass
    /// in [`crate::validate`]. Ordering is normalized to field declaration
    /// order regardless of which rule fired first.
    #[must_use]
    pub(crate) fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by_key(|v| v.field);
        Self { violations }
    }

    /// Violations in field declaration order
    #[inline]
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Number of violations (always >= 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report carries no violations (never, for reports the
    /// rule pass hands out)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation fired on the given field
    #[inline]
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Iterate over violations
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_declaration_order() {
        let report = ValidationReport::new(vec![
            FieldViolation::new(Field::HonNumber, "hon number required"),
            FieldViolation::new(Field::ClientName, "must not be empty"),
        ]);
        let fields: Vec<Field> = report.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::ClientName, Field::HonNumber]);
    }

    #[test]
    fn contains_reports_fired_fields_only() {
        let report = ValidationReport::new(vec![FieldViolation::new(
            Field::PartnerId,
            "must not be empty",
        )]);
        assert!(report.contains(Field::PartnerId));
        assert!(!report.contains(Field::ClientName));
    }

    #[test]
    fn display_includes_count() {
        let report =
            ValidationReport::new(vec![FieldViolation::new(Field::Status, "unknown status")]);
        assert!(report.to_string().contains("1 violation"));
    }
}
