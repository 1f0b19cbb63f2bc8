//! Liveness and upstream health endpoints.

use std::sync::Arc;

use ai_stylist_service::health_service::HealthStatus;
use axum::{Json, extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Response body for `GET /api/test`.
#[derive(Debug, Serialize)]
pub struct ApiTestResponse {
    /// Fixed confirmation string the frontend checks for.
    pub message: String,
}

/// `GET /api/test`: enveloped ping used by the frontend.
pub async fn api_test_route() -> Response {
    ApiResponse::success(ApiTestResponse {
        message: "API working".to_string(),
    })
    .into_response_with_status(StatusCode::OK)
}

/// Body for `GET /health`: bare liveness flag, no envelope.
#[derive(Debug, Serialize)]
pub struct HealthOk {
    pub ok: bool,
}

/// `GET /health`: process liveness.
pub async fn health_route() -> Json<HealthOk> {
    Json(HealthOk { ok: true })
}

/// `GET /health/upstream`: probes the chat-completions upstream.
///
/// Always `200`; an unreachable or misconfigured upstream surfaces as
/// `ok: false` in the body, never as an error status.
pub async fn upstream_health_route(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.health.check(state.stylist.config()).await)
}
