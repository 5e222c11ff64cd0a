//! # Imagegen Core
//!
//! Relay logic for `POST /generate-image`.
//!
//! ```text
//! imagegen-core/src/
//! ├── config.rs     # RelayConfig (credential, upstream URL, timeout)
//! ├── upstream.rs   # ImageInference seam + Hugging Face client
//! ├── data_uri.rs   # bytes -> data:image/png;base64,...
//! ├── relay.rs      # relay() + axum handler + router
//! └── cors.rs       # CORS policy shared by every route
//! ```
//!
//! The handler holds no mutable state: configuration is read once at
//! start-up and injected through [`RelayState`].

// Test-only lints: allow panic!, unwrap, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod cors;
pub mod data_uri;
pub mod error;
pub mod relay;
pub mod upstream;


pub use config::RelayConfig;
pub use error::UpstreamError;
pub use relay::{build_relay_router, relay, RelayState};
pub use upstream::{HfInferenceClient, ImageInference};
