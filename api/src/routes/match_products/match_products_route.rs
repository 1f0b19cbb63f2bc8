use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use product_matcher::match_catalog;
use tracing::{debug, info, instrument, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::match_products::{
        match_products_request::MatchProductsRequest,
        match_products_response::MatchProductsResponse,
    },
};

/// HTTP endpoint scoring the current catalog against the shopper's message.
///
/// Matching is local and deterministic; no model call happens here. The
/// response is capped and deduplicated by the engine.
#[instrument(name = "match_products_route", skip(state, headers, body))]
pub async fn match_products_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<MatchProductsRequest>,
) -> AppResult<Response> {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    let Some(query) = body.to_query() else {
        warn!(request_id = %request_id, "match_products_route: missing userMessage");
        return Err(AppError::BadRequest("userMessage is required".into()));
    };

    let snapshot = state.store.snapshot().await;
    debug!(
        request_id = %request_id,
        visible_count = snapshot.visible.len(),
        full_count = snapshot.full.len(),
        has_color = query.color.is_some(),
        has_category = query.category.is_some(),
        keywords = query.keywords.len(),
        "match_products_route: start"
    );

    let results = match_catalog(&snapshot, &query, &state.policy);

    info!(
        request_id = %request_id,
        results = results.len(),
        "match_products_route: success"
    );

    Ok(ApiResponse::success(MatchProductsResponse { results })
        .into_response_with_status(StatusCode::OK))
}
