use async_trait::async_trait;
use secrecy::Secret;
use serde::Deserialize;

use crate::domain::auth_response::AuthResponse;

// ============================================================================
// Request payloads
// ============================================================================

/// Registration form as submitted by a client.
///
/// Fields stay unparsed: the registration flow decides the order in which
/// they are validated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerificationAttempt {
    pub email: Secret<String>,
    pub otp: String,
}

// ============================================================================
// Authentication Scheme
// ============================================================================

/// Register, verify and log in accounts.
///
/// Every operation answers with an [`AuthResponse`]; implementations convert
/// all failures, expected or not, into a negative envelope instead of
/// returning an error to the transport layer.
#[async_trait]
pub trait AuthenticationScheme: Send + Sync + Clone + 'static {
    /// Create a pending account and mail it a one-time code.
    ///
    /// `source_ip` is the caller's address used by the geo restriction; `None`
    /// when it could not be determined.
    async fn register(&self, registration: Registration, source_ip: Option<String>)
    -> AuthResponse;

    /// Confirm email ownership with the mailed code and issue a token.
    async fn verify(&self, attempt: VerificationAttempt) -> AuthResponse;

    /// Authenticate a verified account and issue a token.
    async fn login(&self, credentials: Credentials) -> AuthResponse;
}
