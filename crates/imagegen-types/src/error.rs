//! Relay error definitions.
//!
//! The taxonomy is deliberately flat: every failure of a request lands in one
//! of three variants, and each variant has exactly one caller-visible message.

use thiserror::Error;

use crate::models::ErrorResponse;

/// Message returned when the inference credential is not configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "HF_API_KEY is not set";
/// Message returned when the request has no usable prompt.
pub const MISSING_PROMPT_MESSAGE: &str = "Prompt is required";
/// Message returned for every upstream failure, whatever its cause.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to generate image";

/// Errors that terminate a `POST /generate-image` request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    /// No credential configured; detected before any I/O.
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    /// Prompt absent or falsy; detected before any I/O.
    #[error("{}", MISSING_PROMPT_MESSAGE)]
    MissingPrompt,

    /// Outbound call failed (network, timeout, non-2xx, body read).
    #[error("Upstream failure: {message}")]
    Upstream {
        /// Diagnostic cause, logged server-side only
        message: String,
    },
}

impl RelayError {
    /// Build an upstream failure from any displayable cause.
    pub fn upstream(cause: impl std::fmt::Display) -> Self {
        Self::Upstream { message: cause.to_string() }
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingPrompt => 400,
            Self::MissingCredential | Self::Upstream { .. } => 500,
        }
    }

    /// Message shown to the caller. Upstream causes are never included.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            Self::MissingPrompt => MISSING_PROMPT_MESSAGE,
            Self::Upstream { .. } => UPSTREAM_FAILURE_MESSAGE,
        }
    }

    /// JSON body sent to the caller.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.public_message())
    }
}

/// Standard Result type using RelayError.
pub type Result<T> = std::result::Result<T, RelayError>;
