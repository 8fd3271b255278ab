//! regform validation
//!
//! Declarative per-field validation for the registration form. A field carries
//! a [`RuleSet`] fixed at construction; [`validate`] turns a value and a rule
//! set into an [`ErrorList`], and [`FieldValidator`] keeps the list from the
//! last run so the UI host can show it beneath the field.
//!
//! Failed rules are data, not errors: validation itself cannot fail. The only
//! `Err` in this crate is [`RuleError`], raised while *building* a rule set.

pub mod email;
pub mod errors;
pub mod rules;
pub mod string;
pub mod validator;

pub use email::EMAIL_PATTERN;
pub use errors::ErrorList;
pub use rules::{RuleError, RuleSet, RuleSpec};
pub use string::{INVALID_FORMAT, REQUIRED};
pub use validator::{validate, FieldValidator};
