//! Form payload
//!
//! The field map captured from the demo-request form, with the fixed
//! required-field rule: name, email and company must be non-blank after
//! trimming.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::FormError;
use crate::Result;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "company"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormPayload {
    fields: BTreeMap<String, String>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Enforce the required-field rule.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|name| {
                self.fields
                    .get(**name)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut payload = Self::new();
        for (k, v) in iter {
            payload.set(k, v);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_payload_passes() {
        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "ada@acme.io")
            .with("company", "Acme");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_blank_field_fails() {
        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "")
            .with("company", "Acme");

        match payload.validate() {
            Err(FormError::MissingFields(missing)) => assert_eq!(missing, vec!["email"]),
            other => panic!("Expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let payload = FormPayload::new()
            .with("name", "   ")
            .with("email", "ada@acme.io")
            .with("company", "Acme");
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_absent_fields_reported() {
        let payload = FormPayload::new().with("name", "Ada");
        match payload.validate() {
            Err(FormError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["email", "company"]);
            }
            other => panic!("Expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "ada@acme.io")
            .with("company", "Acme")
            .with("message", "");
        assert!(payload.validate().is_ok());
    }
}
