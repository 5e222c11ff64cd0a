use std::path::PathBuf;

use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use imagegen_core::cors::cors_layer;
use imagegen_core::{build_relay_router, RelayState};

/// Largest accepted request body (matches a 100kb JSON body cap).
const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Where the landing page and public assets live.
#[derive(Debug, Clone)]
pub struct StaticSettings {
    pub static_dir: PathBuf,
    pub index_file: PathBuf,
}

pub fn build_router(settings: &StaticSettings, relay_state: RelayState) -> Router {
    // `/` prefers public/index.html, then falls back to the landing file.
    let landing = ServeDir::new(&settings.static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(&settings.index_file));

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info))
        .route_service("/", landing);

    build_relay_router(relay_state)
        .merge(public_routes)
        .fallback_service(ServeDir::new(&settings.static_dir))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
