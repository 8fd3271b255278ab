//! Rule sets
//!
//! [`RuleSpec`] is the serializable description of a field's rules, as it
//! appears in `regform.toml` or in a `data-validate` attribute. [`RuleSet`] is
//! the compiled, immutable form that validation runs against.

use crate::email::EMAIL_PATTERN;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a rule set
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Uncompiled rules for one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    /// Value must be non-empty after trimming
    #[serde(default)]
    pub required: bool,

    /// Minimum length in UTF-16 code units
    #[serde(default, alias = "min_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Regex the whole value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl RuleSpec {
    /// Compile into a [`RuleSet`], failing on a malformed pattern
    pub fn compile(&self) -> Result<RuleSet, RuleError> {
        let mut rules = RuleSet::new();
        rules.required = self.required;
        rules.min_length = self.min_length;
        if let Some(ref source) = self.pattern {
            rules = rules.pattern_str(source)?;
        }
        Ok(rules)
    }
}

/// Compiled, immutable rules for one field.
///
/// Rules are evaluated in a fixed order (required, min length, pattern)
/// regardless of the order they were added to the builder.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    required: bool,
    min_length: Option<usize>,
    pattern: Option<CompiledPattern>,
}

static EMAIL_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .required()
        .pattern_str(EMAIL_PATTERN)
        .expect("EMAIL_PATTERN is a valid regex")
});

#[derive(Debug, Clone)]
struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl RuleSet {
    /// Empty rule set: every value is valid
    pub fn new() -> Self {
        Self::default()
    }

    /// Required field with the standard email pattern, compiled once
    pub fn email() -> Self {
        EMAIL_RULES.clone()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Add a pattern from source text.
    ///
    /// The pattern is anchored at both ends before compiling, so it must match
    /// the entire value.
    pub fn pattern_str(mut self, source: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|source_err| {
            RuleError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            }
        })?;
        self.pattern = Some(CompiledPattern {
            source: source.to_string(),
            regex,
        });
        Ok(self)
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min_len(&self) -> Option<usize> {
        self.min_length
    }

    /// Anchored pattern used for matching
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref().map(|p| &p.regex)
    }

    /// Pattern as it was written, before anchoring
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(|p| p.source.as_str())
    }

    /// Back to the serializable description
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec {
            required: self.required,
            min_length: self.min_length,
            pattern: self.pattern_source().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let rules = RuleSet::new().required().min_length(6);
        assert!(rules.is_required());
        assert_eq!(rules.min_len(), Some(6));
        assert!(rules.pattern().is_none());
    }

    #[test]
    fn test_email_rules_are_shared() {
        let a = RuleSet::email();
        let b = RuleSet::email();
        assert!(a.is_required());
        assert_eq!(a.pattern_source(), Some(EMAIL_PATTERN));
        assert_eq!(a.pattern().unwrap().as_str(), b.pattern().unwrap().as_str());
        assert_eq!(a.pattern().unwrap().as_str(), EMAIL_RULES.pattern().unwrap().as_str());
    }

    #[test]
    fn test_pattern_is_anchored() {
        let rules = RuleSet::new().pattern_str("[0-9]+").unwrap();
        let regex = rules.pattern().unwrap();
        assert!(regex.is_match("12345"));
        assert!(!regex.is_match("abc123"));
        assert!(!regex.is_match("123abc"));
        assert_eq!(rules.pattern_source(), Some("[0-9]+"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let rules = RuleSet::new().pattern_str("a|b").unwrap();
        let regex = rules.pattern().unwrap();
        assert!(regex.is_match("a"));
        assert!(!regex.is_match("ab"));
        assert!(!regex.is_match("xb"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RuleSet::new().pattern_str("[unclosed").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
        assert!(err.to_string().starts_with("invalid pattern `[unclosed`"));
    }

    #[test]
    fn test_spec_roundtrip_through_compile() {
        let spec = RuleSpec {
            required: true,
            min_length: Some(6),
            pattern: Some(EMAIL_PATTERN.to_string()),
        };
        assert_eq!(spec.compile().unwrap().to_spec(), spec);
        assert_eq!(RuleSet::email().to_spec().pattern.as_deref(), Some(EMAIL_PATTERN));
    }

    #[test]
    fn test_spec_json_is_camel_case() {
        let spec = RuleSpec {
            required: true,
            min_length: Some(6),
            pattern: None,
        };
        assert_eq!(
            serde_json::to_string(&spec).unwrap(),
            r#"{"required":true,"minLength":6}"#
        );

        let parsed: RuleSpec = serde_json::from_str(r#"{"minLength":3}"#).unwrap();
        assert_eq!(parsed.min_length, Some(3));
        assert!(!parsed.required);

        let snake: RuleSpec = serde_json::from_str(r#"{"min_length":4}"#).unwrap();
        assert_eq!(snake.min_length, Some(4));
    }
}
