//! HTTP surface of the backend: router, shared state, middleware, startup.

use std::{env, error::Error, sync::Arc};

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::{
    core::app_state::AppState,
    middleware_layer::envelope_mapper::envelope_error_mapper,
    routes::{
        health_route::{api_test_route, health_route, upstream_health_route},
        match_products::match_products_route::match_products_route,
        stylist::stylist_route::stylist_route,
        upload_products::upload_products_route::upload_products_route,
    },
};

/// Default TCP port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// JSON body cap; catalog uploads arrive as one bulk payload.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub async fn start() -> Result<(), Box<dyn Error>> {
    let state = Arc::new(AppState::from_env()?);

    // The storefront widget calls from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/test", get(api_test_route))
        .route("/health", get(health_route))
        .route("/health/upstream", get(upstream_health_route))
        .route("/api/products/upload", post(upload_products_route))
        .route("/api/match", post(match_products_route))
        .route("/api/stylist", post(stylist_route))
        .layer(middleware::from_fn(envelope_error_mapper))
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", resolve_port());

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn resolve_port() -> u16 {
    match env::var("PORT") {
        Ok(v) if !v.trim().is_empty() => v.trim().parse().unwrap_or_else(|_| {
            warn!(value = %v, "PORT is not a valid u16, using default");
            DEFAULT_PORT
        }),
        _ => DEFAULT_PORT,
    }
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
