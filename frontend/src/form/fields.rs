use std::collections::BTreeMap;

use thiserror::Error;

pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm_password";

/// Field set of the registration form, in display order.
pub const SIGNUP_FIELDS: &[&str] = &[USERNAME, EMAIL, PASSWORD, CONFIRM_PASSWORD];

/// Field name to human-readable message; absence of a key means the
/// field is currently valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Writing to a field name that was never declared. Programmer error,
/// not a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {name}")]
pub struct UnknownFieldError {
    pub name: String,
}

/// Current values and validation errors of one form instance. The field
/// set is fixed at construction; at most one value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStore {
    values: BTreeMap<String, String>,
    errors: ErrorMap,
}

impl FieldStore {
    pub fn new(names: &[&str]) -> Self {
        Self {
            values: names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            errors: ErrorMap::new(),
        }
    }

    /// Replaces the value for `name`. Editing a field that currently
    /// carries a validation error clears that field's error and only
    /// that field's error; related fields are not re-checked until the
    /// next submit attempt.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldError> {
        let Some(slot) = self.values.get_mut(name) else {
            return Err(UnknownFieldError {
                name: name.to_string(),
            });
        };
        *slot = value.into();
        self.errors.remove(name);
        Ok(())
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Wholesale replacement, used once per submit attempt.
    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }
}
