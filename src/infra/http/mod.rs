//! HTTP surface: middleware stack, router assembly, serve loop.

pub mod api;
pub mod middleware;

pub use api::ApiState;

use std::future::IntoFuture;
use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};
use tokio::sync::Notify;
use tracing::{error, info, warn};

use crate::config::{CorsSettings, Settings};
use crate::infra::error::InfraError;

pub fn build_router(state: ApiState, cors: Arc<CorsSettings>) -> Router {
    api::build_api_router(state)
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .layer(axum_middleware::from_fn_with_state(
            cors,
            middleware::apply_cors,
        ))
        .layer(axum_middleware::from_fn(middleware::set_request_context))
}

/// Serve until a shutdown signal arrives, then drain open connections for at
/// most the configured graceful-shutdown window.
pub async fn serve(settings: &Settings, state: ApiState) -> Result<(), InfraError> {
    let router = build_router(state, Arc::new(settings.cors.clone()));

    let listener = tokio::net::TcpListener::bind(settings.server.addr).await?;
    info!(target: "sakaya::http", addr = %settings.server.addr, "listening");

    let shutdown_started = Arc::new(Notify::new());
    let notify = shutdown_started.clone();
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            notify.notify_one();
        })
        .into_future();

    let deadline = settings.server.graceful_shutdown;
    tokio::select! {
        result = server => result.map_err(InfraError::from),
        _ = async {
            shutdown_started.notified().await;
            tokio::time::sleep(deadline).await;
        } => {
            warn!(
                target: "sakaya::http",
                timeout_secs = deadline.as_secs(),
                "graceful shutdown deadline exceeded, aborting open connections",
            );
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(target: "sakaya::http", error = %error, "failed to install interrupt handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                error!(target: "sakaya::http", error = %error, "failed to install terminate handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }

    info!(target: "sakaya::http", "shutdown signal received");
}
