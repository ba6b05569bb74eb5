//! Integration tests for the chat proxy, covering happy paths and every
//! error shape the wire format defines. Each test builds an independent
//! router with a mock completion client.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use finsee_advisor::{AdvisorError, CompletionClient};
use finsee_api::{create_router, AppState};
use finsee_core::config::FinseeConfig;

// =============================================================================
// Helpers
// =============================================================================

/// Completion client that echoes a canned answer.
struct MockCompletion;

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, query: &str) -> Result<String, AdvisorError> {
        Ok(format!("Build an emergency fund first. You asked: {query}"))
    }
}

/// Completion client whose upstream always fails.
struct FailingCompletion;

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn complete(&self, _query: &str) -> Result<String, AdvisorError> {
        Err(AdvisorError::Upstream {
            status: 502,
            body: "model overloaded, internal trace id abc123".to_string(),
        })
    }
}

fn make_app(advisor: Option<Arc<dyn CompletionClient>>) -> axum::Router {
    create_router(AppState::new(FinseeConfig::default(), advisor))
}

fn chat_request(json: &str) -> Request<Body> {
    Request::post("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// /health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
}

// =============================================================================
// /api/chat happy path
// =============================================================================

#[tokio::test]
async fn test_chat_happy_path() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app
        .oneshot(chat_request(r#"{"query":"How do mutual funds work?"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    let answer = json["response"].as_str().unwrap();
    assert!(!answer.is_empty());
    assert!(answer.contains("How do mutual funds work?"));
}

#[tokio::test]
async fn test_chat_trims_query() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app
        .oneshot(chat_request(r#"{"query":"  What is PPF?  "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["response"].as_str().unwrap().contains("What is PPF?"));
}

// =============================================================================
// /api/chat bad requests
// =============================================================================

#[tokio::test]
async fn test_chat_missing_query() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app.oneshot(chat_request(r#"{}"#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Valid query string is required");
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_chat_non_string_query() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app.oneshot(chat_request(r#"{"query":42}"#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Valid query string is required");
}

#[tokio::test]
async fn test_chat_empty_query() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app
        .oneshot(chat_request(r#"{"query":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_malformed_json() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app.oneshot(chat_request("{not json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_chat_empty_body() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app.oneshot(chat_request("")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Request body is required");
}

// =============================================================================
// /api/chat server-side failures
// =============================================================================

#[tokio::test]
async fn test_chat_without_credential() {
    let app = make_app(None);
    let resp = app
        .oneshot(chat_request(r#"{"query":"How do FDs work?"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "API key not configured");
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_chat_missing_credential_wins_over_bad_body() {
    // The credential check runs before payload validation.
    let app = make_app(None);
    let resp = app.oneshot(chat_request("{not json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "API key not configured");
}

#[tokio::test]
async fn test_chat_upstream_failure_is_generic() {
    let app = make_app(Some(Arc::new(FailingCompletion)));
    let resp = app
        .oneshot(chat_request(r#"{"query":"How do FDs work?"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "error");
    // The upstream detail stays in the logs, never in the response.
    let message = json["error"].as_str().unwrap();
    assert!(!message.contains("abc123"));
    assert!(!message.contains("overloaded"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = make_app(Some(Arc::new(MockCompletion)));
    let resp = app
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
