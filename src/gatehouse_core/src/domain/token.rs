use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid signing secret: {0}")]
    InvalidSecret(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Failed to create token: {0}")]
    Encoding(String),
    #[error("Token lifetime out of range")]
    LifetimeOutOfRange,
}

/// Compact signed bearer token handed to a client.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}
