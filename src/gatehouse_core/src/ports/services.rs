use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::Password,
    password_hash::PasswordHash,
    token::{AuthToken, TokenError},
};

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

/// Port trait for IP geolocation.
///
/// Best effort: any failure to resolve is reported as `None`.
#[async_trait]
pub trait CountryResolver: Send + Sync {
    async fn resolve_country(&self, ip_address: &str) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Failed to verify password: {0}")]
    Verify(String),
}

/// Port trait for the salted one-way password hash.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError>;

    /// `Ok(false)` on a mismatch; `Err` only when the comparison could not run.
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, HashingError>;
}

/// Stateless signer and verifier of time-bounded bearer tokens.
pub trait TokenService: Send + Sync {
    /// Sign a token for `subject`, issued now and expiring after the configured lifetime.
    fn issue(&self, subject: &str) -> Result<AuthToken, TokenError>;

    /// True only for a correctly signed, unexpired token whose subject is
    /// `expected_subject`. Never fails.
    fn validate(&self, token: &str, expected_subject: &str) -> bool;

    /// Subject of a correctly signed token. Expiry is not checked.
    fn extract_subject(&self, token: &str) -> Result<String, TokenError>;
}

// Shared handles, so adapters can be chosen at runtime behind `Arc<dyn ...>`.

#[async_trait]
impl<T: EmailClient + ?Sized> EmailClient for Arc<T> {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        (**self).send_email(recipient, subject, content).await
    }
}

#[async_trait]
impl<T: CountryResolver + ?Sized> CountryResolver for Arc<T> {
    async fn resolve_country(&self, ip_address: &str) -> Option<String> {
        (**self).resolve_country(ip_address).await
    }
}
