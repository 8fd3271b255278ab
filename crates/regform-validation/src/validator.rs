//! Field validator
//!
//! [`validate`] is the single rule engine shared by every field. It checks
//! every applicable rule, never stopping at the first failure, so the user
//! sees all problems with a value at once.

use crate::errors::ErrorList;
use crate::rules::RuleSet;
use crate::string::{check_min_length, check_pattern, check_required};

/// Validate `value` against `rules`.
///
/// Order is fixed: required, then min length, then pattern. Every failing rule
/// contributes exactly one message.
pub fn validate(value: &str, rules: &RuleSet) -> ErrorList {
    let mut errors = ErrorList::new();

    if rules.is_required() {
        if let Err(msg) = check_required(value) {
            errors.push(msg);
        }
    }

    if let Some(min) = rules.min_len() {
        if let Err(msg) = check_min_length(value, min) {
            errors.push(msg);
        }
    }

    if let Some(pattern) = rules.pattern() {
        if let Err(msg) = check_pattern(value, pattern) {
            errors.push(msg);
        }
    }

    errors
}

/// Rules for one field plus the errors from its last validation run.
///
/// The stored errors only change when [`FieldValidator::validate`] is called;
/// between runs they may be stale relative to the field's value.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    rules: RuleSet,
    errors: ErrorList,
}

impl FieldValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            errors: ErrorList::new(),
        }
    }

    /// Run the rules against `value`, replacing the stored errors
    pub fn validate(&mut self, value: &str) -> &ErrorList {
        self.errors = validate(value, &self.rules);
        tracing::debug!(errors = self.errors.len(), "field validated");
        &self.errors
    }

    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Whether the last run produced no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
