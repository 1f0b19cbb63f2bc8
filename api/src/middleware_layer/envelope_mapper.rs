use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::core::http::response_envelope::ApiResponse;

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn ensure_request_id(parts: &mut axum::http::response::Parts) -> String {
    if let Some(h) = parts.headers.get("X-Request-Id") {
        if let Ok(v) = h.to_str() {
            if !v.trim().is_empty() {
                return v.to_string();
            }
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    if let Ok(value) = HeaderValue::from_str(&id) {
        parts.headers.insert("X-Request-Id", value);
    }
    id
}

/// Rewraps axum's plain-text extractor rejections (malformed JSON, wrong-typed
/// fields, missing/unsupported content type, oversized bodies) into the
/// standard envelope, so every client-facing error reads
/// `{"success":false,"error":"..."}`.
///
/// Responses that already carry `application/json` pass through untouched:
/// handlers shape their own envelopes.
pub async fn envelope_error_mapper(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();

    if !(status == StatusCode::BAD_REQUEST
        || status == StatusCode::PAYLOAD_TOO_LARGE
        || status == StatusCode::UNSUPPORTED_MEDIA_TYPE
        || status == StatusCode::UNPROCESSABLE_ENTITY)
    {
        return res;
    }

    let already_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if already_json {
        return res;
    }

    let (mut parts, bytes) = take_body(res).await;
    let original = String::from_utf8_lossy(&bytes);
    let _req_id = ensure_request_id(&mut parts); // id in the header, not the body

    let message = {
        let trimmed = original.trim();
        if trimmed.is_empty() {
            status.canonical_reason().unwrap_or("request rejected")
        } else {
            trimmed
        }
    };

    let envelope = ApiResponse::<()>::error(message);
    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(), // fall back to the original body
    };

    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    // The body just changed size; a stale length would truncate the response.
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, body.into())
}
