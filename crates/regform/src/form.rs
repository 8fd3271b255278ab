// File: src/form.rs
// Purpose: Form coordinator owning the six fields and the submit decision

use crate::config::FormRules;
use crate::field::{Field, FieldState};
use crate::record::RegistrationRecord;
use crate::sink::{SubmissionSink, TracingSink};
use regform_validation::{ErrorList, FieldValidator};

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed and the record went to the sink
    Submitted,
    /// At least one field failed; nothing was submitted
    Rejected { invalid_fields: Vec<Field> },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[derive(Debug, Clone, Default)]
struct FieldSlot {
    state: FieldState,
    validator: FieldValidator,
}

/// Registration form: six (value, validator) pairs plus a submission sink.
///
/// Values change through [`RegistrationForm::set`] on every keystroke; errors
/// only change on [`RegistrationForm::submit`], so between the two they can be
/// stale.
#[derive(Debug)]
pub struct RegistrationForm<S = TracingSink> {
    slots: [FieldSlot; 6],
    sink: S,
}

impl RegistrationForm<TracingSink> {
    /// Form with the default rules, submitting to the log
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for RegistrationForm<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmissionSink> RegistrationForm<S> {
    pub fn with_sink(sink: S) -> Self {
        Self::with_rules(FormRules::default(), sink)
    }

    pub fn with_rules(rules: FormRules, sink: S) -> Self {
        let slots = Field::ALL.map(|field| FieldSlot {
            state: FieldState::new(),
            validator: FieldValidator::new(rules.get(field).clone()),
        });
        Self { slots, sink }
    }

    /// Replace a field's value verbatim
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = &mut self.slots[field.index()];
        slot.state.set(value);
        tracing::trace!(field = %field, revision = slot.state.revision(), "field updated");
    }

    pub fn value(&self, field: Field) -> &str {
        self.slots[field.index()].state.get()
    }

    /// Errors from the field's last validation run
    pub fn errors(&self, field: Field) -> &ErrorList {
        self.slots[field.index()].validator.errors()
    }

    pub fn revision(&self, field: Field) -> u64 {
        self.slots[field.index()].state.revision()
    }

    pub fn rules(&self, field: Field) -> &regform_validation::RuleSet {
        self.slots[field.index()].validator.rules()
    }

    /// Validate every field, then submit if all of them passed.
    ///
    /// All six fields are validated on every attempt, in field order, so the
    /// user sees every problem at once. The record is built and handed to the
    /// sink only after the last validation has run and every list is empty.
    pub fn submit(&mut self) -> SubmitOutcome {
        let span = tracing::debug_span!("submit");
        let _enter = span.enter();

        for slot in self.slots.iter_mut() {
            slot.validator.validate(slot.state.get());
        }

        let invalid_fields: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !self.slots[field.index()].validator.is_valid())
            .collect();

        if !invalid_fields.is_empty() {
            tracing::debug!(?invalid_fields, "submit rejected");
            return SubmitOutcome::Rejected { invalid_fields };
        }

        let record = self.snapshot();
        tracing::debug!("submit accepted");
        self.sink.submit(record);
        SubmitOutcome::Submitted
    }

    fn snapshot(&self) -> RegistrationRecord {
        RegistrationRecord {
            first_name: self.value(Field::FirstName).to_string(),
            last_name: self.value(Field::LastName).to_string(),
            email: self.value(Field::Email).to_string(),
            contact: self.value(Field::Contact).to_string(),
            password: self.value(Field::Password).to_string(),
            confirm_password: self.value(Field::ConfirmPassword).to_string(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
