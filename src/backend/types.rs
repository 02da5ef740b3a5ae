use crate::{Error, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// Raw reply from the backend, kept unparsed so callers decide whether a
/// non-success status is a failure before touching the body.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl BackendResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ensure_success(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(Error::BackendStatus {
                status: self.status.as_u16(),
            })
        }
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
