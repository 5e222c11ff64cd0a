// CORS policy
use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the relay; only `GET`/`POST` with
/// `Content-Type`/`Authorization` request headers are allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
