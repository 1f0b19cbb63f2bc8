use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Universal response envelope for both success and error.
///
/// The payload is flattened next to `success`, so
/// `ApiResponse::success(MatchProductsResponse { results })` serializes as
/// `{"success":true,"results":[...]}`. Error envelopes carry a plain string:
/// `{"success":false,"error":"..."}`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,

    #[serde(flatten)]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Build a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build an error envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Convert to axum Response.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        message: &'static str,
    }

    #[test]
    fn success_flattens_the_payload() {
        let body = serde_json::to_value(ApiResponse::success(Payload {
            message: "API working",
        }))
        .unwrap();
        assert_eq!(body, json!({"success": true, "message": "API working"}));
    }

    #[test]
    fn error_carries_a_plain_string() {
        let body = serde_json::to_value(ApiResponse::<()>::error("No products provided")).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "error": "No products provided"})
        );
    }
}
