//! Process-wide relay configuration.

use std::fmt;
use std::time::Duration;

/// Hugging Face Inference endpoint for FLUX.1-schnell.
pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/black-forest-labs/FLUX.1-schnell";

pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;
pub const CONNECT_TIMEOUT_SECS: u64 = 20;

/// Immutable configuration, built once at start-up and shared by every request.
#[derive(Clone)]
pub struct RelayConfig {
    api_key: Option<String>,
    inference_url: String,
    upstream_timeout: Duration,
}

impl RelayConfig {
    /// An empty key counts as unset. Any other value, whitespace included, is
    /// sent as-is.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.is_empty());
        Self {
            api_key,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    /// Override the inference URL. Invalid overrides fall back to the default.
    pub fn with_inference_url(mut self, url: Option<String>) -> Self {
        self.inference_url = resolve_inference_url(url);
        self
    }

    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn inference_url(&self) -> &str {
        &self.inference_url
    }

    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

// Never print the credential.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("inference_url", &self.inference_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

fn resolve_inference_url(explicit: Option<String>) -> String {
    let Some(raw) = explicit else {
        return DEFAULT_INFERENCE_URL.to_string();
    };
    let url = raw.trim().to_string();
    if url.is_empty() {
        tracing::warn!("HF_INFERENCE_URL is empty, using default");
        return DEFAULT_INFERENCE_URL.to_string();
    }
    if url::Url::parse(&url).is_err() {
        tracing::warn!("HF_INFERENCE_URL is not a valid URL, using default");
        return DEFAULT_INFERENCE_URL.to_string();
    }
    tracing::info!("Using custom inference URL: {}", url);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_key_is_unset() {
        assert!(!RelayConfig::new(Some(String::new())).has_api_key());
        assert_eq!(RelayConfig::new(Some("   ".to_string())).api_key(), Some("   "));
        assert!(!RelayConfig::new(None).has_api_key());
        assert_eq!(RelayConfig::new(Some("hf_abc".to_string())).api_key(), Some("hf_abc"));
    }

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.inference_url(), DEFAULT_INFERENCE_URL);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_inference_url_override() {
        let config =
            RelayConfig::default().with_inference_url(Some("http://127.0.0.1:9000/flux".into()));
        assert_eq!(config.inference_url(), "http://127.0.0.1:9000/flux");
    }

    #[test]
    fn test_invalid_inference_url_falls_back() {
        for raw in ["", "   ", "not a url"] {
            let config = RelayConfig::default().with_inference_url(Some(raw.to_string()));
            assert_eq!(config.inference_url(), DEFAULT_INFERENCE_URL, "override {raw:?}");
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = RelayConfig::new(Some("hf_super_secret".to_string()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("hf_super_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
