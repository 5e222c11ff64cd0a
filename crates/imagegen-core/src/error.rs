//! Errors raised while talking to the inference provider.

use thiserror::Error;

/// Longest upstream body kept for diagnostics.
const MAX_LOGGED_BODY_CHARS: usize = 512;

/// Failure of the outbound inference call.
///
/// Every variant collapses into the same caller-visible 500; the detail only
/// ever reaches the server log.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UpstreamError {
    /// Network request failed (connect, timeout, TLS, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status.
    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl UpstreamError {
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status { status, body: body.chars().take(MAX_LOGGED_BODY_CHARS).collect() }
    }

    /// True when the outbound call hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
