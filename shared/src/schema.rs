//! Acceptance rules of the login form.
//!
//! Rules are declared on [`LoginFormInput`] and evaluated in declaration
//! order; for each field only the first failing rule is reported.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{FieldName, LoginFormValues};

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
/// Minimum password length in UTF-16 code units, the unit browsers use for
/// string length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Local part, `@`, then dot-terminated labels and an alphabetic top-level
/// label. Leading and doubled dots are rejected by [`email_dots`].
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Raw values as typed by the user, before the schema accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct LoginFormInput {
    #[validate(
        regex(path = *EMAIL_RE, message = "Invalid email address"),
        custom(function = "email_dots")
    )]
    pub email: String,
    #[validate(custom(function = "password_length"))]
    pub password: String,
}

impl LoginFormInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Per-field error messages of a rejected [`LoginFormInput`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("invalid login form: {} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(value: ValidationErrors) -> Self {
        let mut errors = BTreeMap::new();
        for (key, field_errors) in value.field_errors() {
            let Ok(field) = FieldName::from_str(&key) else {
                log::warn!("Validation error for unknown field, field={key}");
                continue;
            };
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .clone()
                    .map(Cow::into_owned)
                    .unwrap_or_else(|| first.code.to_string());
                errors.insert(field, message);
            }
        }
        Self { errors }
    }
}

/// Runs every rule against `input`, producing the validated payload or the
/// first error message of each failing field.
pub fn parse(input: &LoginFormInput) -> Result<LoginFormValues, FieldErrors> {
    input.validate().map_err(FieldErrors::from)?;
    Ok(LoginFormValues {
        email: input.email.clone(),
        password: input.password.clone(),
    })
}

/// Error message of a single field, taken from a full-schema evaluation.
pub fn validate_field(input: &LoginFormInput, field: FieldName) -> Option<String> {
    match parse(input) {
        Ok(_) => None,
        Err(errors) => errors.get(field).map(str::to_string),
    }
}

fn email_dots(value: &str) -> Result<(), ValidationError> {
    if value.starts_with('.') || value.contains("..") {
        return Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL)));
    }
    Ok(())
}

fn password_length(value: &str) -> Result<(), ValidationError> {
    if value.encode_utf16().count() < PASSWORD_MIN_LENGTH {
        let mut error = ValidationError::new("length").with_message(Cow::Borrowed(PASSWORD_TOO_SHORT));
        error.add_param(Cow::Borrowed("min"), &PASSWORD_MIN_LENGTH);
        return Err(error);
    }
    Ok(())
}
