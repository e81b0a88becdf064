use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "special character" rule of the password policy.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

pub const PASSWORD_POLICY_MESSAGE: &str = "Password must be at least 8 characters long and contain at least one number, one uppercase letter, and one special character";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
}

/// A plaintext password candidate as submitted by a user.
///
/// Parsing only rejects blank input. Strength is a separate rule checked by
/// [`Password::meets_policy`] so the registration flow controls when it runs.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Minimum length, at least one digit, one uppercase letter and one symbol.
    pub fn meets_policy(&self) -> bool {
        let password = self.0.expose_secret();

        let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
        let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

        long_enough && has_digit && has_uppercase && has_symbol
    }

    pub fn matches(&self, other: &Password) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
