//! HTTP surface of the relay.
//!
//! Exposes the provider webhook at `POST /webhook` and a plain-text health
//! check at `GET /`. The router is generic over the relay's collaborators
//! so tests can drive it with in-memory adapters.

pub mod handlers;

#[cfg(test)]
mod tests;

use crate::language::ports::LanguageDetector;
use crate::relay::{ports::MessageDelivery, services::RelayService};
use crate::translation::ports::Translator;
use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Errors raised while running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested.
        address: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the relay router.
#[must_use]
pub fn router<D, T, M, C>(relay: Arc<RelayService<D, T, M, C>>) -> Router
where
    D: LanguageDetector + 'static,
    T: Translator + 'static,
    M: MessageDelivery + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::health))
        .route("/webhook", post(handlers::webhook::<D, T, M, C>))
        .with_state(relay)
}

/// Binds `address` and serves `router` until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the address is unavailable and
/// [`ServerError::Serve`] when the server fails while running.
pub async fn serve(address: SocketAddr, router: Router) -> Result<(), ServerError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;
    let local = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { address, source })?;
    info!(address = %local, "relay listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
