// regform - registration form model
// Field values, per-field validation, and the submit decision, independent of
// any particular UI host

pub mod config;
pub mod field;
pub mod form;
pub mod record;
pub mod sink;
pub mod view;

// Re-export Maud markup type for hosts rendering the view
pub use maud::Markup;

pub use config::{FormConfig, FormRules, RulesConfig, ViewConfig};
pub use field::{Field, FieldError, FieldState};
pub use form::{RegistrationForm, SubmitOutcome};
pub use record::RegistrationRecord;
pub use sink::{SubmissionSink, TracingSink};

// Re-export the rule engine
pub use regform_validation as validation;
pub use regform_validation::{ErrorList, RuleSet, RuleSpec};
