//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Success body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    /// Always "success".
    pub status: &'static str,
}

/// Body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

/// GET /health - liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// POST /api/chat - forward a financial question to the advisor model.
///
/// The credential check comes first: without one the endpoint reports the
/// configuration problem even for a bad payload. Upstream failures are
/// logged with their cause but answered with a generic message.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let advisor = state
        .advisor
        .as_ref()
        .ok_or_else(|| ApiError::Internal("API key not configured".to_string()))?;

    if body.is_empty() {
        return Err(ApiError::BadRequest("Request body is required".to_string()));
    }
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Valid query string is required".to_string()))?;
    let query = payload
        .get("query")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Valid query string is required".to_string()))?;

    match advisor.complete(query).await {
        Ok(response) => Ok(Json(ChatResponse {
            response,
            status: "success",
        })),
        Err(err) => {
            tracing::error!(%err, "Advisor request failed");
            Err(ApiError::Internal(
                "The advisor is unavailable right now".to_string(),
            ))
        }
    }
}
