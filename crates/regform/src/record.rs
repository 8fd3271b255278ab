// File: src/record.rs
// Purpose: Snapshot of a successfully validated registration

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six field values captured at the moment of a successful submit
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRecord {
    pub fn get(&self, field: Field) -> &str {
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

// Passwords stay out of Debug output so records can be logged
impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("contact", &self.contact)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> RegistrationRecord {
        RegistrationRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            contact: "12345".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["confirmPassword"], "secret1");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let debug = format!("{:?}", ada());
        assert!(debug.contains("Lovelace"));
        assert!(!debug.contains("secret1"));
    }

    #[test]
    fn test_get_by_field() {
        let record = ada();
        for field in Field::ALL {
            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(json[field.key()], record.get(field));
        }
    }
}
