// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use crate::field::Field;
use anyhow::{Context, Result};
use regform_validation::{RuleSet, RuleSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub view: ViewConfig,
}

/// Per-field validation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "first_name_spec")]
    pub first_name: RuleSpec,

    #[serde(default = "last_name_spec")]
    pub last_name: RuleSpec,

    #[serde(default = "email_spec")]
    pub email: RuleSpec,

    #[serde(default = "contact_spec")]
    pub contact: RuleSpec,

    #[serde(default = "password_spec")]
    pub password: RuleSpec,

    #[serde(default = "confirm_password_spec")]
    pub confirm_password: RuleSpec,
}

/// Markup options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Text of the submit button (default: "Register")
    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    /// CSS class on the `<form>` element (default: "registration-form")
    #[serde(default = "default_form_class")]
    pub form_class: String,
}

// Default values
fn first_name_spec() -> RuleSpec {
    Field::FirstName.default_spec()
}

fn last_name_spec() -> RuleSpec {
    Field::LastName.default_spec()
}

fn email_spec() -> RuleSpec {
    Field::Email.default_spec()
}

fn contact_spec() -> RuleSpec {
    Field::Contact.default_spec()
}

fn password_spec() -> RuleSpec {
    Field::Password.default_spec()
}

fn confirm_password_spec() -> RuleSpec {
    Field::ConfirmPassword.default_spec()
}

fn default_submit_label() -> String {
    "Register".to_string()
}

fn default_form_class() -> String {
    "registration-form".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_name: first_name_spec(),
            last_name: last_name_spec(),
            email: email_spec(),
            contact: contact_spec(),
            password: password_spec(),
            confirm_password: confirm_password_spec(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            submit_label: default_submit_label(),
            form_class: default_form_class(),
        }
    }
}

impl RulesConfig {
    pub fn spec(&self, field: Field) -> &RuleSpec {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

impl FormConfig {
    /// Load configuration from regform.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text; blank text gives the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }

    /// Compile every field's rules, failing on the first malformed pattern
    pub fn compile(&self) -> Result<FormRules> {
        let mut rules = FormRules::default();
        for field in Field::ALL {
            let compiled = self
                .rules
                .spec(field)
                .compile()
                .with_context(|| format!("Invalid rules for field `{}`", field))?;
            rules = rules.with(field, compiled);
        }
        Ok(rules)
    }
}

/// Compiled rules for all six fields
#[derive(Debug, Clone)]
pub struct FormRules {
    rules: [RuleSet; 6],
}

impl FormRules {
    pub fn get(&self, field: Field) -> &RuleSet {
        &self.rules[field.index()]
    }

    /// Replace one field's rules
    pub fn with(mut self, field: Field, rules: RuleSet) -> Self {
        self.rules[field.index()] = rules;
        self
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            rules: Field::ALL.map(Field::default_rules),
        }
    }
}
