use async_trait::async_trait;
use chat_gateway::{
    Result,
    backend::{Backend, BackendResponse},
};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One outbound call as seen by the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Backend stand-in that records every call and answers with a canned reply.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    status: StatusCode,
    body: String,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::replying(StatusCode::OK, "{}")
    }

    pub fn replying(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            status,
            body: body.into(),
        }
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn reply(&self) -> BackendResponse {
        BackendResponse::new(self.status, self.body.clone().into_bytes())
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn get(&self, path: &str) -> Result<BackendResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: "GET",
            path: path.to_string(),
            body: None,
        });
        Ok(self.reply())
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<BackendResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: "POST",
            path: path.to_string(),
            body: Some(body.clone()),
        });
        Ok(self.reply())
    }
}
