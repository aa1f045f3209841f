//! HTTP surface of the gateway.

pub mod ask;
pub mod error;

use std::net::SocketAddr;

use axum::{Router, routing::post};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::gateway::CompletionGateway;

pub use ask::AskRequest;
pub use error::{ErrorResponse, ServerError};

pub const ASK_PATH: &str = "/api/ai/ask";

pub fn router(gateway: CompletionGateway) -> Router {
    Router::new()
        .route(ASK_PATH, post(ask::ask))
        .with_state(gateway)
}

/// Serve the gateway on `addr` until SIGINT or SIGTERM.
pub async fn serve(addr: SocketAddr, gateway: CompletionGateway) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Completion gateway listening");

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Completion gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
