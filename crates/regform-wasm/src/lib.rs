//! regform WASM
//!
//! WebAssembly bindings that let a browser page act as the UI host for the
//! registration form: forward input events to `setValue`, call `submit` from
//! the form's submit handler (after `preventDefault`), and render each field's
//! `errors` beneath it.

use regform::validation::{validate, RuleSpec};
use regform::{Field, FormConfig, RegistrationForm, RegistrationRecord, SubmissionSink, ViewConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Logs submitted records to the browser console
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn submit(&mut self, record: RegistrationRecord) {
        // Debug output leaves the passwords out
        let line = format!("registration submitted: {:?}", record);
        web_sys::console::log_1(&JsValue::from_str(&line));
    }
}

/// Errors for one field, as returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct FieldErrors {
    pub field: String,
    pub messages: Vec<String>,
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse::<Field>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The registration form, exposed to JavaScript as `RegistrationForm`
#[wasm_bindgen(js_name = RegistrationForm)]
pub struct RegistrationFormHandle {
    form: RegistrationForm<ConsoleSink>,
    view: ViewConfig,
}

#[wasm_bindgen(js_class = RegistrationForm)]
impl RegistrationFormHandle {
    /// Form with the default rules
    #[wasm_bindgen(constructor)]
    pub fn new() -> RegistrationFormHandle {
        Self {
            form: RegistrationForm::with_sink(ConsoleSink),
            view: ViewConfig::default(),
        }
    }

    /// Form configured from `regform.toml` text
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(toml: &str) -> Result<RegistrationFormHandle, JsValue> {
        let config = FormConfig::parse(toml)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {:#}", e)))?;
        let rules = config
            .compile()
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;

        Ok(Self {
            form: RegistrationForm::with_rules(rules, ConsoleSink),
            view: config.view,
        })
    }

    /// Store a field's new value (call on every input event)
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, field: &str, value: String) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.form.set(field, value);
        Ok(())
    }

    pub fn value(&self, field: &str) -> Result<String, JsValue> {
        let field = parse_field(field)?;
        Ok(self.form.value(field).to_string())
    }

    /// Messages from the field's last validation, as an array of strings
    pub fn errors(&self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        Ok(serde_wasm_bindgen::to_value(self.form.errors(field))?)
    }

    /// Every field with a non-empty error list, in field order
    #[wasm_bindgen(js_name = allErrors)]
    pub fn all_errors(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.field_errors())?)
    }

    /// Validate all fields; returns true when the record was submitted
    pub fn submit(&mut self) -> bool {
        self.form.submit().is_submitted()
    }

    /// Current markup for the whole form
    pub fn render(&self) -> String {
        regform::view::render(&self.form, &self.view).into_string()
    }
}

impl RegistrationFormHandle {
    fn field_errors(&self) -> Vec<FieldErrors> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.form.errors(*field).is_empty())
            .map(|field| FieldErrors {
                field: field.key().to_string(),
                messages: self.form.errors(field).as_slice().to_vec(),
            })
            .collect()
    }
}

impl Default for RegistrationFormHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a single value against a rules object
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('abc', { required: true, minLength: 6 });
/// // ["Must be at least 6 characters long"]
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(value: &str, rules: JsValue) -> Result<JsValue, JsValue> {
    let spec: RuleSpec = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;
    let rules = spec
        .compile()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&validate(value, &rules))?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn fill(handle: &mut RegistrationFormHandle) {
        for (field, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
            ("contact", "12345"),
            ("password", "secret1"),
            ("confirmPassword", "secret1"),
        ] {
            handle.set_value(field, value.to_string()).unwrap();
        }
    }

    #[wasm_bindgen_test]
    fn test_submit_valid_form() {
        let mut handle = RegistrationFormHandle::new();
        fill(&mut handle);
        assert!(handle.submit());
        assert!(handle.field_errors().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_submit_short_password() {
        let mut handle = RegistrationFormHandle::new();
        fill(&mut handle);
        handle.set_value("password", "abc".to_string()).unwrap();

        assert!(!handle.submit());
        let errors = handle.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].messages, vec!["Must be at least 6 characters long".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_unknown_field() {
        let mut handle = RegistrationFormHandle::new();
        assert!(handle.set_value("nickname", "x".to_string()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_from_config() {
        let handle = RegistrationFormHandle::from_config("[view]\nsubmit_label = \"Join\"\n").unwrap();
        assert!(handle.render().contains(">Join</button>"));
        assert!(RegistrationFormHandle::from_config("[rules.email]\npattern = \"(\"\n").is_err());
    }
}
