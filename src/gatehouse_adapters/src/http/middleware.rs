use axum::{
    extract::{Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use gatehouse_core::{AuthResponse, AuthValidator};

use super::routes::envelope;

/// Rejects requests the validator does not accept with `401` and a failure
/// envelope. Accepted requests carry the validator's claims as an extension.
///
/// Install with `axum::middleware::from_fn_with_state(validator, require_bearer::<V>)`.
pub async fn require_bearer<V>(State(validator): State<V>, request: Request, next: Next) -> Response
where
    V: AuthValidator<RequestParts = Parts>,
{
    let (mut parts, body) = request.into_parts();

    match validator.validate(&parts).await {
        Ok(claims) => {
            parts.extensions.insert(claims);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(e) => {
            tracing::info!(error = %e, "Rejected unauthenticated request");
            envelope(StatusCode::UNAUTHORIZED, AuthResponse::failure(e.to_string())).into_response()
        }
    }
}
