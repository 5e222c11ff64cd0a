//! Outbound inference call.
//!
//! The relay only talks to [`ImageInference`]; [`HfInferenceClient`] is the
//! production implementation against the Hugging Face Inference API.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::{RelayConfig, CONNECT_TIMEOUT_SECS};
use crate::error::UpstreamError;

/// Text-to-image provider.
#[async_trait]
pub trait ImageInference: Send + Sync {
    /// Generate one image for `prompt`, returning the raw response body.
    async fn text_to_image(&self, api_key: &str, prompt: &Value) -> Result<Bytes, UpstreamError>;
}

/// Build the shared HTTP client with bounded connect and total timeouts.
pub fn build_http_client(timeout: Duration) -> Result<Client, UpstreamError> {
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(timeout)
        .build()?;
    Ok(client)
}

pub struct HfInferenceClient {
    http_client: Client,
    url: String,
}

impl HfInferenceClient {
    /// Create a client from a pre-built `reqwest::Client`.
    pub fn new(http_client: Client, url: impl Into<String>) -> Self {
        Self { http_client, url: url.into() }
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, UpstreamError> {
        let http_client = build_http_client(config.upstream_timeout())?;
        Ok(Self::new(http_client, config.inference_url()))
    }
}

#[async_trait]
impl ImageInference for HfInferenceClient {
    async fn text_to_image(&self, api_key: &str, prompt: &Value) -> Result<Bytes, UpstreamError> {
        let response = self
            .http_client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&json!({ "inputs": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::status(status.as_u16(), &body));
        }

        let image = response.bytes().await?;
        tracing::debug!("[Upstream] Received {} bytes", image.len());
        Ok(image)
    }
}
