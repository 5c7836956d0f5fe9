use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub mod form_state;
pub mod schema;
pub mod visibility;

pub use form_state::{
    FieldState, FormAction, FormOptions, FormPhase, FormState, RevalidateMode, ValidationMode,
};
pub use schema::{
    FieldErrors, LoginFormInput, INVALID_EMAIL, PASSWORD_MIN_LENGTH, PASSWORD_TOO_SHORT,
};
pub use visibility::PasswordVisibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FieldName {
    Email,
    Password,
}

/// Validated submission payload. Produced by [`schema::parse`] only after both
/// field rules passed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFormValues {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginFormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormValues")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
