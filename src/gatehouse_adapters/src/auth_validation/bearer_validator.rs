use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use gatehouse_core::{AuthValidator, TokenService};
use thiserror::Error;

/// Subject of a validated bearer token, placed in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BearerTokenError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Accepts requests carrying `Authorization: Bearer <token>` with a correctly
/// signed, unexpired token.
#[derive(Clone)]
pub struct BearerTokenValidator<T> {
    token_service: T,
}

impl<T> BearerTokenValidator<T> {
    pub fn new(token_service: T) -> Self {
        Self { token_service }
    }
}

pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerTokenError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(BearerTokenError::MissingToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(BearerTokenError::MissingToken)?;

    if token.is_empty() {
        return Err(BearerTokenError::MissingToken);
    }
    Ok(token)
}

#[async_trait]
impl<T: TokenService + Clone + 'static> AuthValidator for BearerTokenValidator<T> {
    type Claims = AuthenticatedSubject;
    type RequestParts = Parts;
    type Error = BearerTokenError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let token = extract_bearer(&parts.headers)?;

        let subject = self
            .token_service
            .extract_subject(token)
            .map_err(|_| BearerTokenError::InvalidToken)?;

        // extract_subject skips the expiry check
        if !self.token_service.validate(token, &subject) {
            return Err(BearerTokenError::InvalidToken);
        }

        Ok(AuthenticatedSubject(subject))
    }
}
