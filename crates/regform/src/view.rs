// File: src/view.rs
// Purpose: Maud markup for the registration form

use crate::config::ViewConfig;
use crate::field::Field;
use crate::form::RegistrationForm;
use crate::sink::SubmissionSink;
use maud::{html, Markup};

/// Render the whole form: one group per field, then the submit button.
///
/// Each group carries the input and, directly beneath it, one `span.error`
/// per message in the field's current error list.
pub fn render<S: SubmissionSink>(form: &RegistrationForm<S>, view: &ViewConfig) -> Markup {
    html! {
        form class=(view.form_class) {
            @for field in Field::ALL {
                (render_field(form, field))
            }
            button type="submit" { (view.submit_label) }
        }
    }
}

/// Render a single `div.form-group`
pub fn render_field<S: SubmissionSink>(form: &RegistrationForm<S>, field: Field) -> Markup {
    // Secrets are never written back into the page
    let value = if field.is_secret() { None } else { Some(form.value(field)) };
    let rules = serde_json::to_string(&form.rules(field).to_spec())
        .expect("RuleSpec has only string, bool and integer fields");

    html! {
        div.form-group {
            input
                type=(field.input_type())
                name=(field.key())
                placeholder=(field.label())
                value=[value]
                data-validate=(rules);
            @for error in form.errors(field) {
                span.error { (error) }
            }
        }
    }
}
