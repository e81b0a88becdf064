use axum::{
    extract::{Request, State},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use gatehouse_core::{AuthResponse, AuthValidator};

use super::envelope;
use crate::auth_validation::AuthenticatedSubject;

/// Reports whether the request's bearer token is valid and for whom.
#[tracing::instrument(name = "Verify Token", skip_all)]
pub async fn verify_token<V>(State(validator): State<V>, request: Request) -> Response
where
    V: AuthValidator<Claims = AuthenticatedSubject, RequestParts = Parts>,
{
    let (parts, _) = request.into_parts();

    match validator.validate(&parts).await {
        Ok(AuthenticatedSubject(subject)) => envelope(
            StatusCode::OK,
            AuthResponse::success(format!("Token is valid for {subject}")),
        )
        .into_response(),
        Err(e) => {
            envelope(StatusCode::UNAUTHORIZED, AuthResponse::failure(e.to_string())).into_response()
        }
    }
}
