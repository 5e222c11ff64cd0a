//! `POST /generate-image`

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use imagegen_types::{ErrorResponse, GenerationRequest, GenerationResult, RelayError};

use crate::config::RelayConfig;
use crate::data_uri::encode_data_uri;
use crate::error::UpstreamError;
use crate::upstream::{HfInferenceClient, ImageInference};

/// Handler state: immutable configuration plus the inference seam.
#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<RelayConfig>,
    pub inference: Arc<dyn ImageInference>,
}

impl RelayState {
    pub fn new(config: RelayConfig, inference: Arc<dyn ImageInference>) -> Self {
        Self { config: Arc::new(config), inference }
    }

    /// State backed by the Hugging Face client described by `config`.
    pub fn from_config(config: RelayConfig) -> Result<Self, UpstreamError> {
        let client = HfInferenceClient::from_config(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

/// Turn one request into an image or a terminal error.
///
/// Checks run in order and short-circuit: credential, prompt, outbound call.
/// No outbound call is made unless the first two pass.
pub async fn relay(
    config: &RelayConfig,
    inference: &dyn ImageInference,
    request: Option<&GenerationRequest>,
) -> imagegen_types::Result<GenerationResult> {
    let api_key = config.api_key().ok_or(RelayError::MissingCredential)?;
    let prompt = request.and_then(GenerationRequest::prompt).ok_or(RelayError::MissingPrompt)?;

    let image = inference.text_to_image(api_key, prompt).await.map_err(|e| {
        if e.is_timeout() {
            error!("[Relay] Inference call timed out: {}", e);
        } else {
            error!("[Relay] Inference call failed: {}", e);
        }
        RelayError::upstream(e)
    })?;

    info!("[Relay] Generated image ({} bytes)", image.len());
    Ok(GenerationResult { image: encode_data_uri(&image) })
}

/// axum handler for `POST /generate-image`.
///
/// A body that is not a JSON object (or not JSON at all) is treated like one
/// without a prompt.
pub async fn generate_image(
    State(state): State<RelayState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerationResult>, (StatusCode, Json<ErrorResponse>)> {
    let request = match payload {
        Ok(Json(body)) => Some(GenerationRequest::from_json(body)),
        Err(rejection) => {
            debug!("[Relay] Unreadable request body: {}", rejection.body_text());
            None
        },
    };

    relay(&state.config, state.inference.as_ref(), request.as_ref())
        .await
        .map(Json)
        .map_err(|e| error_response(&e))
}

/// Map a relay error onto its status code and JSON body.
pub fn error_response(err: &RelayError) -> (StatusCode, Json<ErrorResponse>) {
    if matches!(err, RelayError::MissingCredential) {
        warn!("[Relay] Rejecting request: HF_API_KEY is not set");
    }
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_response()))
}

/// Router exposing the relay endpoint. CORS and static serving are layered on
/// by the caller.
pub fn build_relay_router(state: RelayState) -> Router {
    Router::new().route("/generate-image", post(generate_image)).with_state(state)
}
