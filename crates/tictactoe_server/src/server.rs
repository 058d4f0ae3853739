//! HTTP server lifecycle.

use crate::api;
use crate::config::ServerConfig;
use crate::handle::SessionHandle;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Binds to the configured address and serves until Ctrl-C.
#[instrument(skip(config), fields(addr = %config.bind_addr()))]
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    run(listener, SessionHandle::new(), shutdown_signal()).await?;
    Ok(())
}

/// Serves the API on an already bound listener until `shutdown` resolves.
pub async fn run(
    listener: TcpListener,
    handle: SessionHandle,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Server ready at http://{}/", addr);

    axum::serve(listener, api::router(handle))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
