//! # Imagegen Types
//!
//! Wire models and error definitions for the image relay.
//!
//! - **`error`** - The flat relay error taxonomy and its HTTP status mapping
//! - **`models`** - Request/response bodies of `POST /generate-image`
//!
//! ## Architecture Role
//!
//! `imagegen-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     imagegen-types (this crate)
//!            │
//!            ▼
//!      imagegen-core
//!            │
//!            ▼
//!     imagegen-server
//! ```

pub mod error;
pub mod models;

pub use error::{RelayError, Result};
pub use models::{ErrorResponse, GenerationRequest, GenerationResult, DATA_URI_PREFIX};
