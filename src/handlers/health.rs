use axum::extract::State;
use axum::http::StatusCode;

use crate::server::AppState;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Ready once at least one provider is registered.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.providers.is_empty() {
        (StatusCode::SERVICE_UNAVAILABLE, "no providers configured")
    } else {
        (StatusCode::OK, "ok")
    }
}
