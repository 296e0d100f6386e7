//! Server runner.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::{config::ServerConfig, error::ServerError};

use super::{
    identity::USER_ID_HEADER, router::build_app, signal::shutdown_signal, state::AppState,
};

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("Listening on http://{}", addr);
    tracing::warn!(
        "Caller identity is read from the {} header without verification; \
         only expose this server behind a gateway that authenticates requests",
        USER_ID_HEADER
    );

    serve(listener, build_app(state)).await
}

/// Serve an already bound listener with graceful shutdown.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
