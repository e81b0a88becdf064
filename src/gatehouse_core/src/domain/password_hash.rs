use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordHashError {
    #[error("Password hash is empty")]
    Empty,
}

/// Opaque one-way digest of a password (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn parse(hash: Secret<String>) -> Result<Self, PasswordHashError> {
        if hash.expose_secret().is_empty() {
            return Err(PasswordHashError::Empty);
        }
        Ok(Self(hash))
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PasswordHash {}
