//! Axum routes for the `/api/auth` surface.
//!
//! Every route answers with an [`AuthResponse`] envelope, including requests
//! whose JSON body cannot be parsed.

pub mod login;
pub mod register;
pub mod verify;
pub mod verify_token;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_core::AuthResponse;

pub use login::login;
pub use register::register;
pub use verify::verify;
pub use verify_token::verify_token;

pub(crate) fn envelope(status: StatusCode, response: AuthResponse) -> impl IntoResponse {
    (status, Json(response))
}

/// Failure envelope for a body the JSON extractor rejected.
pub(crate) fn malformed_body(rejection: JsonRejection) -> Response {
    tracing::info!(error = %rejection.body_text(), "Rejected malformed request body");
    envelope(
        StatusCode::BAD_REQUEST,
        AuthResponse::failure(format!("Invalid request: {}", rejection.body_text())),
    )
    .into_response()
}
