use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TEST_MESSAGE: &str = "Test poruka";
pub const DEFAULT_TEST_SESSION: &str = "test-session";
pub const DEFAULT_TEST_MODEL: &str = "gpt-4";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusErrorResponse {
    pub status: String,
    pub message: String,
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BackendProbeResponse {
    pub status: String,
    pub backend_status: Value,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatTestResponse {
    pub status: String,
    pub backend_response: Value,
    pub message: String,
}

/// Outbound smoke-test message. Fields keep whatever JSON the caller sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatPayload {
    pub message: Value,
    pub session_id: Value,
    pub model: Value,
}

impl ChatPayload {
    /// Fills `message`, `session_id` and `model` from the inbound body,
    /// using the defaults for missing, `null` or empty-string fields.
    pub fn from_body(body: &Value) -> Self {
        Self {
            message: field_or_default(body, "message", DEFAULT_TEST_MESSAGE),
            session_id: field_or_default(body, "session_id", DEFAULT_TEST_SESSION),
            model: field_or_default(body, "model", DEFAULT_TEST_MODEL),
        }
    }
}

fn field_or_default(body: &Value, key: &str, default: &str) -> Value {
    match body.get(key) {
        None | Some(Value::Null) => Value::from(default),
        Some(Value::String(s)) if s.is_empty() => Value::from(default),
        Some(value) => value.clone(),
    }
}
