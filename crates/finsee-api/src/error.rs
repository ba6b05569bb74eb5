//! API error type and JSON error response formatting.
//!
//! Every error leaves the server as `{"error": <message>, "status": "error"}`
//! with the matching HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Always "error".
    pub status: &'static str,
}

/// API error mapped to an HTTP status and JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid request payload.
    BadRequest(String),
    /// 500 Internal Server Error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: "error",
        };

        (status, Json(body)).into_response()
    }
}
