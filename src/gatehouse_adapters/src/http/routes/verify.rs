use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_core::{AuthenticationScheme, VerificationAttempt};

use super::{envelope, malformed_body};

#[tracing::instrument(name = "Verify", skip_all)]
pub async fn verify<A>(
    State(scheme): State<A>,
    payload: Result<Json<VerificationAttempt>, JsonRejection>,
) -> Response
where
    A: AuthenticationScheme,
{
    let Json(attempt) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };

    let response = scheme.verify(attempt).await;
    envelope(StatusCode::OK, response).into_response()
}
