//! Image Relay Server - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Relays `POST /generate-image` prompts to Hugging Face Inference
//! - Serves the landing page and public assets
//! - Exposes /health and /version for supervisors
//!
//! Access via: http://localhost:3000

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod router;
mod server_utils;

#[cfg(test)]
mod test_helpers;

use cli::Cli;
use imagegen_core::RelayState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads the environment.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    match dotenv {
        Ok(path) => info!("✅ Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
        Err(e) => warn!("⚠️ Could not load .env file: {}", e),
    }

    let relay_config = cli.relay_config();
    if !relay_config.has_api_key() {
        // Keep serving: the endpoint reports the missing key per request.
        error!("HF_API_KEY is not set. Please set it in your environment or .env file.");
    }
    info!(
        "🔀 Inference endpoint: {} (timeout {}s)",
        relay_config.inference_url(),
        relay_config.upstream_timeout().as_secs()
    );

    let relay_state = RelayState::from_config(relay_config)?;
    let app = router::build_router(&cli.static_settings(), relay_state);

    let listener = server_utils::create_listener(cli.mode, &cli.host, cli.port).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Server running at http://localhost:{} ({:?} mode)", addr.port(), cli.mode);
    info!("🎨 Relay endpoint: POST http://localhost:{}/generate-image", addr.port());

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber =
        FmtSubscriber::builder().with_env_filter(filter).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
