/// How the password input renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Plain,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    pub fn is_plain(self) -> bool {
        self == Self::Plain
    }

    /// Accessible label of the toggle button, describing what a click does.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Masked => "Show password",
            Self::Plain => "Hide password",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_masked() {
        let visibility = PasswordVisibility::default();
        assert_eq!(visibility, PasswordVisibility::Masked);
        assert_eq!(visibility.toggle_label(), "Show password");
        assert!(!visibility.is_plain());
    }

    #[test]
    fn one_toggle_shows_plain_text() {
        let visibility = PasswordVisibility::default().toggled();
        assert!(visibility.is_plain());
        assert_eq!(visibility.toggle_label(), "Hide password");
    }

    #[test]
    fn two_toggles_restore_original() {
        for start in [PasswordVisibility::Masked, PasswordVisibility::Plain] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
    }
}
