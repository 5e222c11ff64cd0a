//! Test helpers for imagegen-server unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use tempfile::TempDir;

use imagegen_core::{ImageInference, RelayConfig, RelayState, UpstreamError};

use crate::router::{build_router, StaticSettings};

pub const LANDING_MARKER: &str = "<h1>Image Relay landing</h1>";
pub const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// Inference stub that always answers with the PNG magic bytes.
pub struct FixedImage;

#[async_trait]
impl ImageInference for FixedImage {
    async fn text_to_image(
        &self,
        _api_key: &str,
        _prompt: &Value,
    ) -> Result<Bytes, UpstreamError> {
        Ok(Bytes::from_static(&PNG_MAGIC))
    }
}

/// Landing file plus a public dir holding `style.css`.
///
/// Returns `(StaticSettings, TempDir)`. Keep `TempDir` alive for the test duration.
pub fn test_static_settings() -> (StaticSettings, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let index_file = temp_dir.path().join("index.html");
    std::fs::write(&index_file, format!("<html><body>{LANDING_MARKER}</body></html>"))
        .expect("failed to write landing file");

    let static_dir = temp_dir.path().join("public");
    std::fs::create_dir(&static_dir).expect("failed to create public dir");
    std::fs::write(static_dir.join("style.css"), "body { margin: 0; }")
        .expect("failed to write asset");

    (StaticSettings { static_dir, index_file }, temp_dir)
}

/// Full application router with a stubbed inference provider.
pub fn test_server(api_key: Option<&str>) -> (axum_test::TestServer, TempDir) {
    let (settings, temp_dir) = test_static_settings();
    let config = RelayConfig::new(api_key.map(str::to_string));
    let state = RelayState::new(config, Arc::new(FixedImage));
    let server = axum_test::TestServer::new(build_router(&settings, state))
        .expect("failed to start test server");
    (server, temp_dir)
}
