//! Form state controller.
//!
//! Keeps the raw values, touched/dirty flags and the error message of every
//! field, and decides when the schema runs. Inputs arrive as [`FormAction`]s.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::schema::{self, LoginFormInput};
use crate::{FieldName, LoginFormValues};

/// When a field is validated before the first submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ValidationMode {
    #[default]
    OnSubmit,
    OnBlur,
    OnChange,
    /// First blur, then every change.
    OnTouched,
    All,
}

/// When a field is validated again once a submit was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum RevalidateMode {
    OnSubmit,
    OnBlur,
    #[default]
    OnChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormOptions {
    pub mode: ValidationMode,
    pub revalidate_mode: RevalidateMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Change { field: FieldName, value: String },
    Blur(FieldName),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub dirty: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Change,
    Blur,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    options: FormOptions,
    email: FieldState,
    password: FieldState,
    phase: FormPhase,
    submit_count: u32,
}

impl FormState {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn field(&self, field: FieldName) -> &FieldState {
        match field {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.field(field).error.as_deref()
    }

    pub fn has_errors(&self) -> bool {
        self.email.error.is_some() || self.password.error.is_some()
    }

    pub fn input(&self) -> LoginFormInput {
        LoginFormInput::new(self.email.value.clone(), self.password.value.clone())
    }

    /// Applies one action. Returns the validated payload only for the submit
    /// attempt that moved the form into [`FormPhase::Submitted`].
    pub fn apply(&mut self, action: FormAction) -> Option<LoginFormValues> {
        if self.is_submitted() {
            log::debug!("Form already submitted, ignoring action={action:?}");
            return None;
        }
        match action {
            FormAction::Change { field, value } => {
                self.change(field, value);
                None
            }
            FormAction::Blur(field) => {
                self.blur(field);
                None
            }
            FormAction::Submit => self.submit(),
        }
    }

    fn change(&mut self, field: FieldName, value: String) {
        let state = self.field_mut(field);
        state.dirty = !value.is_empty();
        state.value = value;
        if self.should_validate(field, Trigger::Change) {
            self.validate_field(field);
        }
    }

    fn blur(&mut self, field: FieldName) {
        self.field_mut(field).touched = true;
        if self.should_validate(field, Trigger::Blur) {
            self.validate_field(field);
        }
    }

    fn submit(&mut self) -> Option<LoginFormValues> {
        self.transition(FormPhase::Validating);
        self.submit_count += 1;
        self.email.touched = true;
        self.password.touched = true;

        match schema::parse(&self.input()) {
            Ok(values) => {
                self.email.error = None;
                self.password.error = None;
                self.transition(FormPhase::Submitted);
                Some(values)
            }
            Err(errors) => {
                log::debug!("Submit blocked, {errors}");
                self.email.error = errors.get(FieldName::Email).map(str::to_string);
                self.password.error = errors.get(FieldName::Password).map(str::to_string);
                self.transition(FormPhase::Editing);
                None
            }
        }
    }

    fn should_validate(&self, field: FieldName, trigger: Trigger) -> bool {
        if self.submit_count > 0 {
            return match self.options.revalidate_mode {
                RevalidateMode::OnSubmit => false,
                RevalidateMode::OnBlur => trigger == Trigger::Blur,
                RevalidateMode::OnChange => trigger == Trigger::Change,
            };
        }
        match self.options.mode {
            ValidationMode::OnSubmit => false,
            ValidationMode::OnBlur => trigger == Trigger::Blur,
            ValidationMode::OnChange => trigger == Trigger::Change,
            ValidationMode::OnTouched => match trigger {
                Trigger::Blur => true,
                Trigger::Change => self.field(field).touched,
            },
            ValidationMode::All => true,
        }
    }

    fn validate_field(&mut self, field: FieldName) {
        let error = schema::validate_field(&self.input(), field);
        self.field_mut(field).error = error;
    }

    fn field_mut(&mut self, field: FieldName) -> &mut FieldState {
        match field {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        }
    }

    fn transition(&mut self, next: FormPhase) {
        log::debug!("Form phase {} -> {next}", self.phase);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{INVALID_EMAIL, PASSWORD_TOO_SHORT};

    fn change(field: FieldName, value: &str) -> FormAction {
        FormAction::Change {
            field,
            value: value.to_string(),
        }
    }

    fn filled(email: &str, password: &str) -> FormState {
        let mut form = FormState::default();
        form.apply(change(FieldName::Email, email));
        form.apply(change(FieldName::Password, password));
        form
    }

    #[test]
    fn starts_empty_and_editing() {
        let form = FormState::default();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.field(FieldName::Email), &FieldState::default());
        assert_eq!(form.field(FieldName::Password), &FieldState::default());
        assert_eq!(form.submit_count(), 0);
    }

    #[test]
    fn invalid_email_blocks_submit() {
        let mut form = filled("not-an-email", "abc123");
        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
        assert_eq!(form.error(FieldName::Password), None);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn short_password_blocks_submit() {
        let mut form = filled("user@example.com", "abc");
        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(form.error(FieldName::Email), None);
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn valid_values_are_submitted_unmodified() {
        let mut form = filled("user@example.com", "abcdef");
        let values = form.apply(FormAction::Submit);
        assert_eq!(
            values,
            Some(LoginFormValues {
                email: "user@example.com".to_string(),
                password: "abcdef".to_string(),
            })
        );
        assert!(!form.has_errors());
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.field(FieldName::Email).value, "user@example.com");
        assert_eq!(form.field(FieldName::Password).value, "abcdef");
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = filled("user@example.com", "abcdef");
        assert!(form.apply(FormAction::Submit).is_some());
        assert_eq!(form.apply(FormAction::Submit), None);
        form.apply(change(FieldName::Email, "other@example.com"));
        assert_eq!(form.field(FieldName::Email).value, "user@example.com");
        assert_eq!(form.submit_count(), 1);
        assert!(form.is_submitted());
    }

    #[test]
    fn failed_submit_then_fix_submits_once() {
        let mut form = filled("user@example.com", "abc");
        assert_eq!(form.apply(FormAction::Submit), None);
        form.apply(change(FieldName::Password, "abcdef"));
        assert_eq!(form.error(FieldName::Password), None);
        assert!(form.apply(FormAction::Submit).is_some());
        assert_eq!(form.submit_count(), 2);
    }

    #[test]
    fn on_submit_mode_stays_quiet_until_submit() {
        let mut form = FormState::default();
        form.apply(change(FieldName::Email, "nope"));
        form.apply(FormAction::Blur(FieldName::Email));
        assert_eq!(form.error(FieldName::Email), None);
        assert!(form.field(FieldName::Email).touched);
        assert!(form.field(FieldName::Email).dirty);
    }

    #[test]
    fn revalidates_on_change_after_submit_attempt() {
        let mut form = filled("nope", "abcdef");
        form.apply(FormAction::Submit);
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
        form.apply(change(FieldName::Email, "user@example.com"));
        assert_eq!(form.error(FieldName::Email), None);
        form.apply(change(FieldName::Email, "user@"));
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn on_blur_mode_validates_on_blur_only() {
        let mut form = FormState::new(FormOptions {
            mode: ValidationMode::OnBlur,
            ..FormOptions::default()
        });
        form.apply(change(FieldName::Password, "abc"));
        assert_eq!(form.error(FieldName::Password), None);
        form.apply(FormAction::Blur(FieldName::Password));
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(form.error(FieldName::Email), None);
    }

    #[test]
    fn on_change_mode_validates_every_change() {
        let mut form = FormState::new(FormOptions {
            mode: ValidationMode::OnChange,
            ..FormOptions::default()
        });
        form.apply(change(FieldName::Email, "user"));
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
        form.apply(change(FieldName::Email, "user@example.com"));
        assert_eq!(form.error(FieldName::Email), None);
        form.apply(change(FieldName::Password, "abc"));
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));

        form.apply(change(FieldName::Password, "abcdef"));
        form.apply(change(FieldName::Email, "user@"));
        form.apply(FormAction::Blur(FieldName::Email));
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
        form.apply(change(FieldName::Email, "user@example.com"));
        assert_eq!(form.error(FieldName::Email), None);
    }

    #[test]
    fn all_mode_validates_on_blur_and_change() {
        let mut form = FormState::new(FormOptions {
            mode: ValidationMode::All,
            ..FormOptions::default()
        });
        form.apply(FormAction::Blur(FieldName::Password));
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));
        form.apply(change(FieldName::Password, "abcdef"));
        assert_eq!(form.error(FieldName::Password), None);
        form.apply(change(FieldName::Email, "nope"));
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn revalidate_on_blur_ignores_changes() {
        let mut form = FormState::new(FormOptions {
            revalidate_mode: RevalidateMode::OnBlur,
            ..FormOptions::default()
        });
        form.apply(change(FieldName::Password, "abc"));
        form.apply(FormAction::Submit);
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));

        form.apply(change(FieldName::Password, "abcdef"));
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));
        form.apply(FormAction::Blur(FieldName::Password));
        assert_eq!(form.error(FieldName::Password), None);

        form.apply(change(FieldName::Password, "ab"));
        assert_eq!(form.error(FieldName::Password), None);
        form.apply(FormAction::Blur(FieldName::Password));
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn on_touched_mode_validates_changes_after_first_blur() {
        let mut form = FormState::new(FormOptions {
            mode: ValidationMode::OnTouched,
            ..FormOptions::default()
        });
        form.apply(change(FieldName::Email, "user"));
        assert_eq!(form.error(FieldName::Email), None);
        form.apply(FormAction::Blur(FieldName::Email));
        assert_eq!(form.error(FieldName::Email), Some(INVALID_EMAIL));
        form.apply(change(FieldName::Email, "user@example.com"));
        assert_eq!(form.error(FieldName::Email), None);
    }

    #[test]
    fn revalidate_on_submit_keeps_stale_errors() {
        let mut form = FormState::new(FormOptions {
            revalidate_mode: RevalidateMode::OnSubmit,
            ..FormOptions::default()
        });
        form.apply(change(FieldName::Password, "abc"));
        form.apply(FormAction::Submit);
        form.apply(change(FieldName::Password, "abcdef"));
        assert_eq!(form.error(FieldName::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn clearing_a_field_resets_dirty() {
        let mut form = filled("a", "b");
        form.apply(change(FieldName::Email, ""));
        assert!(!form.field(FieldName::Email).dirty);
        assert!(form.field(FieldName::Password).dirty);
    }

    #[test]
    fn modes_parse_from_camel_case() {
        assert_eq!(ValidationMode::from_str("onTouched").unwrap(), ValidationMode::OnTouched);
        assert_eq!(ValidationMode::from_str("ONBLUR").unwrap(), ValidationMode::OnBlur);
        assert_eq!(ValidationMode::from_str("all").unwrap(), ValidationMode::All);
        assert_eq!(RevalidateMode::from_str("onChange").unwrap(), RevalidateMode::OnChange);
        assert_eq!(ValidationMode::OnSubmit.to_string(), "onSubmit");
        assert!(RevalidateMode::from_str("onTouched").is_err());
    }
}
