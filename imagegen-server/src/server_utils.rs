use anyhow::Result;
use listenfd::ListenFd;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use crate::cli::RunMode;

/// Obtain the listening socket for `mode`.
///
/// A socket handed over by the host (`LISTEN_FDS`) always wins. Hosted mode
/// requires one; local mode binds `host:port` itself.
pub async fn create_listener(
    mode: RunMode,
    host: &str,
    port: u16,
) -> Result<tokio::net::TcpListener> {
    let mut listenfd = ListenFd::from_env();

    if let Some(listener) = listenfd.take_tcp_listener(0)? {
        info!("🔌 Using listener handed over by the host (fd=3)");
        listener.set_nonblocking(true)?;
        return Ok(tokio::net::TcpListener::from_std(listener)?);
    }

    if mode == RunMode::Hosted {
        anyhow::bail!("hosted mode requires a listening socket from the host (LISTEN_FDS unset)");
    }

    let ip: std::net::IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", host, e))?;
    let addr = SocketAddr::new(ip, port);
    let domain = if addr.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("🛑 Received SIGTERM, initiating graceful shutdown..."),
    }

    info!("⏳ Waiting for in-flight image generations to finish...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_mode_binds_ephemeral_port() {
        let listener = create_listener(RunMode::Local, "127.0.0.1", 0).await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_hosted_mode_without_socket_fails() {
        let err = create_listener(RunMode::Hosted, "127.0.0.1", 0).await.expect_err("no fd");
        assert!(err.to_string().contains("hosted mode"));
    }

    #[tokio::test]
    async fn test_invalid_host_is_rejected() {
        let err = create_listener(RunMode::Local, "localhost:3000", 0).await.expect_err("bad ip");
        assert!(err.to_string().contains("Invalid bind address"));
    }
}
