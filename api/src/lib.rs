//! HTTP surface of the chat backend.
//!
//! One operation that matters: `POST /api/chat`. Everything else is
//! plumbing — state wiring, error mapping, a liveness probe, and graceful
//! shutdown.

use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::AppError;

use axum::{
    Router,
    routing::{get, post},
};
use chat_orchestrator::OrchestratorConfig;
use tokio::signal;
use tracing::info;

use crate::routes::{chat::chat_route::chat, health_route::health};

/// Builds the application router over shared state.
///
/// Split out from [`start`] so tests can serve the same router on an
/// ephemeral port.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

/// Wires the state from `config` and serves until Ctrl+C.
///
/// # Errors
/// Fails on startup wiring (client construction) or listener/server IO.
pub async fn start(config: OrchestratorConfig) -> Result<(), AppError> {
    let state = Arc::new(AppState::new(config)?);

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "chat backend listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
