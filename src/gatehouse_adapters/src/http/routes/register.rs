use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_core::{AuthenticationScheme, Registration};

use super::{envelope, malformed_body};
use crate::http::ClientIp;

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<A>(
    State(scheme): State<A>,
    ClientIp(source_ip): ClientIp,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Response
where
    A: AuthenticationScheme,
{
    let Json(registration) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };

    tracing::debug!(source_ip = ?source_ip, "Registration attempt");
    let response = scheme.register(registration, source_ip).await;
    envelope(StatusCode::OK, response).into_response()
}
