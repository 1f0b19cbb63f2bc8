use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use product_matcher::normalize_all;
use tracing::{debug, info, instrument, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::upload_products::{
        upload_products_request::UploadProductsRequest,
        upload_products_response::{ReceivedCounts, UploadProductsResponse},
    },
};

/// HTTP endpoint replacing the in-memory catalog.
///
/// Expects `{ "products": { "visible": [...], "full": [...] } }`. Both tiers
/// are normalized at ingestion (canonical colors, absolute image URLs, safe
/// links) and the new snapshot replaces the old one atomically.
#[instrument(name = "upload_products_route", skip(state, headers, body))]
pub async fn upload_products_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UploadProductsRequest>,
) -> Response {
    if let Some(id) = headers.get("X-Request-Id").and_then(|h| h.to_str().ok()) {
        debug!(%id, "request id attached");
    }

    let Some(products) = body.products else {
        warn!("upload_products_route: no products in body");
        return ApiResponse::<()>::error("No products provided")
            .into_response_with_status(StatusCode::BAD_REQUEST);
    };

    let visible = normalize_all(products.visible, &state.policy.asset_base);
    let full = normalize_all(products.full, &state.policy.asset_base);
    let (visible_count, full_count) = state.store.replace(visible, full).await;

    info!(
        visible = visible_count,
        full = full_count,
        "upload_products_route: catalog stored"
    );

    ApiResponse::success(UploadProductsResponse {
        received: ReceivedCounts {
            visible: visible_count,
            full: full_count,
        },
    })
    .into_response_with_status(StatusCode::OK)
}
