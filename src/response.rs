//! JSON error response helpers.
//!
//! Every failure leaves the service as `{"error": "..."}` with an appropriate
//! status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn with_status(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    with_status(StatusCode::BAD_REQUEST, message)
}

pub fn internal_error(message: impl Into<String>) -> Response {
    with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub fn bad_gateway(message: impl Into<String>) -> Response {
    with_status(StatusCode::BAD_GATEWAY, message)
}
