use super::types::{
    BackendProbeResponse, ChatPayload, ChatTestResponse, ErrorResponse,
    StatusErrorResponse,
};
use crate::{
    Result,
    backend::{Backend, BackendResponse},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

pub const ANALYTICS_ERROR: &str = "Greška pri dohvatanju analitike";
pub const RAG_ERROR: &str = "Greška u RAG chat komunikaciji";
pub const SUGGESTIONS_ERROR: &str = "Greška pri generisanju predloga";
pub const PROBE_OK: &str = "Backend je dostupan";
pub const PROBE_FAILED: &str = "Backend nije dostupan";
pub const CHAT_TEST_OK: &str = "Chat endpoint radi";
pub const CHAT_TEST_FAILED: &str = "Greška pri testiranju chat endpoint-a";

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
}

type ProxyResult = std::result::Result<Json<Value>, (StatusCode, Json<ErrorResponse>)>;
type StatusError = (StatusCode, Json<StatusErrorResponse>);

pub async fn chat_analytics(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ProxyResult {
    info!("Fetching analytics for session: {}", session_id);

    let path = format!("/chat/analytics/{}", session_id);
    relay(state.backend.get(&path).await, ANALYTICS_ERROR)
}

pub async fn rag_chat(State(state): State<AppState>, body: Bytes) -> ProxyResult {
    info!("Forwarding RAG chat request ({} bytes)", body.len());

    relay(
        forward_json(state.backend.as_ref(), "/chat/rag", &body).await,
        RAG_ERROR,
    )
}

pub async fn chat_suggestions(State(state): State<AppState>, body: Bytes) -> ProxyResult {
    info!("Forwarding suggestions request ({} bytes)", body.len());

    relay(
        forward_json(state.backend.as_ref(), "/chat/suggestions", &body).await,
        SUGGESTIONS_ERROR,
    )
}

/// Reports whether the backend root answers with JSON. The backend's own
/// status code is not inspected.
pub async fn test_backend(
    State(state): State<AppState>,
) -> std::result::Result<Json<BackendProbeResponse>, StatusError> {
    info!("Probing backend connectivity");

    match state.backend.get("/").await.and_then(|resp| resp.json()) {
        Ok(backend_status) => Ok(Json(BackendProbeResponse {
            status: STATUS_SUCCESS.to_string(),
            backend_status,
            message: PROBE_OK.to_string(),
        })),
        Err(e) => {
            error!("Backend connectivity probe failed: {}", e);
            Err(status_error(PROBE_FAILED, e))
        }
    }
}

/// Sends a chat message with defaults filled in and wraps whatever JSON the
/// backend returns, regardless of its status code.
pub async fn test_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<ChatTestResponse>, StatusError> {
    info!("Running chat smoke test");

    match send_test_chat(state.backend.as_ref(), &body).await {
        Ok(backend_response) => Ok(Json(ChatTestResponse {
            status: STATUS_SUCCESS.to_string(),
            backend_response,
            message: CHAT_TEST_OK.to_string(),
        })),
        Err(e) => {
            error!("Chat smoke test failed: {}", e);
            Err(status_error(CHAT_TEST_FAILED, e))
        }
    }
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}

async fn forward_json(backend: &dyn Backend, path: &str, body: &[u8]) -> Result<BackendResponse> {
    let payload: Value = serde_json::from_slice(body)?;
    backend.post_json(path, &payload).await
}

async fn send_test_chat(backend: &dyn Backend, body: &[u8]) -> Result<Value> {
    let request: Value = serde_json::from_slice(body)?;
    let payload = serde_json::to_value(ChatPayload::from_body(&request))?;
    backend.post_json("/chat", &payload).await?.json()
}

fn relay(result: Result<BackendResponse>, message: &str) -> ProxyResult {
    match result
        .and_then(BackendResponse::ensure_success)
        .and_then(|resp| resp.json())
    {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!("{}: {}", message, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            ))
        }
    }
}

fn status_error(message: &str, e: crate::Error) -> StatusError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StatusErrorResponse {
            status: STATUS_ERROR.to_string(),
            message: message.to_string(),
            error: e.to_string(),
        }),
    )
}
