//! Request and response bodies of the relay endpoint.

mod generation;

pub use generation::{ErrorResponse, GenerationRequest, GenerationResult, DATA_URI_PREFIX};
