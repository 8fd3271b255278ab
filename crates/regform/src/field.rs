// File: src/field.rs
// Purpose: Registration field catalogue and per-field value holder

use regform_validation::{RuleSet, RuleSpec, EMAIL_PATTERN};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    Unknown(String),
}

/// One labeled registration input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Contact,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in the order they are rendered and validated
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Contact,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Key used in the submitted record and in input `name` attributes
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Contact => "contact",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Placeholder text shown in the empty input
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Contact => "Contact",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML input type
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
            Field::FirstName | Field::LastName | Field::Contact => "text",
        }
    }

    /// Whether the value must never be echoed back into markup or logs
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Position in [`Field::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rules the form uses when no configuration overrides them
    pub fn default_spec(self) -> RuleSpec {
        match self {
            Field::FirstName | Field::LastName | Field::Contact => RuleSpec {
                required: true,
                ..RuleSpec::default()
            },
            Field::Email => RuleSpec {
                required: true,
                min_length: None,
                pattern: Some(EMAIL_PATTERN.to_string()),
            },
            // No equality check between the two; each stands alone
            Field::Password | Field::ConfirmPassword => RuleSpec {
                required: true,
                min_length: Some(6),
                pattern: None,
            },
        }
    }

    pub fn default_rules(self) -> RuleSet {
        match self {
            Field::Email => RuleSet::email(),
            Field::Password | Field::ConfirmPassword => RuleSet::new().required().min_length(6),
            Field::FirstName | Field::LastName | Field::Contact => RuleSet::new().required(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

/// Current text of one input.
///
/// `set` stores the new value verbatim and bumps [`FieldState::revision`] so a
/// UI host can tell the field needs re-rendering.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: String,
    revision: u64,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, new_value: impl Into<String>) {
        self.value = new_value.into();
        self.revision += 1;
    }

    /// Number of `set` calls so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
