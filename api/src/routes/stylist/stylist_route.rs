use std::sync::Arc;

use ai_stylist_service::error_handler::StylistError;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppError,
    routes::stylist::{stylist_request::StylistRequest, stylist_response::StylistResponse},
};

/// HTTP endpoint asking the model for an outfit brief.
///
/// Unrecoverable model output is a normal `200` with
/// `{"success":false,"error":"Invalid JSON from AI"}`: the frontend treats it
/// as "try rephrasing", not as a server fault. Transport and upstream-status
/// failures stay `500`.
#[instrument(name = "stylist_route", skip(state, headers, body))]
pub async fn stylist_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<StylistRequest>,
) -> Response {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(
        request_id = %request_id,
        message_len = body.user_message.len(),
        "stylist_route: start"
    );

    match state.stylist.suggest_outfit(&body.user_message).await {
        Ok(brief) => {
            info!(
                request_id = %request_id,
                pieces = brief.pieces.len(),
                "stylist_route: success"
            );
            ApiResponse::success(StylistResponse { data: brief })
                .into_response_with_status(StatusCode::OK)
        }
        Err(err @ StylistError::InvalidOutfitJson) => {
            warn!(
                request_id = %request_id,
                "stylist_route: model output not repairable"
            );
            ApiResponse::<()>::error(err.to_string()).into_response_with_status(StatusCode::OK)
        }
        Err(err) => {
            error!(
                request_id = %request_id,
                error = %err,
                "stylist_route: upstream failure"
            );
            AppError::from(err).into_response()
        }
    }
}
