use super::types::BackendResponse;
use crate::{Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait Backend: Send + Sync {
    async fn get(&self, path: &str) -> Result<BackendResponse>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<BackendResponse>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> Result<BackendResponse> {
        let status = response.status();
        let body = response.bytes().await?;
        debug!("Backend responded with {} ({} bytes)", status, body.len());
        Ok(BackendResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get(&self, path: &str) -> Result<BackendResponse> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<BackendResponse> {
        let url = self.url(path);
        debug!("POST {}", url);

        let payload = serde_json::to_vec(body)?;
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload)
            .send()
            .await?;
        Self::read(response).await
    }
}
