use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_core::{AuthenticationScheme, Credentials};

use super::{envelope, malformed_body};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<A>(
    State(scheme): State<A>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Response
where
    A: AuthenticationScheme,
{
    let Json(credentials) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };

    let response = scheme.login(credentials).await;
    envelope(StatusCode::OK, response).into_response()
}
