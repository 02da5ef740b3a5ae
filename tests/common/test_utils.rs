use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chat_gateway::{
    backend::{Backend, HttpBackend},
    config::BackendConfig,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Nothing listens on port 1, so connections are refused immediately.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

pub fn create_test_app(backend: impl Backend + 'static) -> Router {
    server::router(AppState {
        backend: Arc::new(backend),
    })
}

/// Router wired to a real HTTP backend at `base_url`
pub fn create_http_app(base_url: &str) -> Router {
    create_test_app(HttpBackend::new(BackendConfig {
        base_url: base_url.to_string(),
    }))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_request(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Sends a request through the router and decodes the JSON reply
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}
