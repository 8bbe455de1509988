// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::analyze::analyze_handler;
use crate::config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use crate::vision::RecognitionBackend;

pub const ANALYZE_ROUTE: &str = "/api/vision/analyze";
pub const HEALTH_ROUTE: &str = "/health";

/// State shared with every handler
///
/// The backend is chosen once at startup and never changes.
#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: RecognitionBackend,
}

impl AppState {
    pub fn new(backend: RecognitionBackend) -> Self {
        Self { backend }
    }

    /// Degraded-mode state, no credentials needed
    pub fn new_for_test() -> Self {
        Self::new(RecognitionBackend::Degraded)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
    pub version: String,
}

/// Build the router with the default body limit
pub fn create_app(state: AppState) -> Router {
    create_app_with_limit(state, DEFAULT_MAX_BODY_BYTES)
}

pub fn create_app_with_limit(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(health_handler))
        .route(ANALYZE_ROUTE, post(analyze_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until Ctrl+C / SIGTERM
pub async fn start_server(config: ServerConfig, state: AppState) -> Result<()> {
    let addr = config.listen_addr()?;
    let mode = state.backend.mode();
    let app = create_app_with_limit(state, config.max_body_bytes);

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    info!("🚀 Vision API server started successfully!");
    info!("🌍 Server running at http://{}", local_addr);
    info!("📝 Endpoints available:");
    info!("   - POST {}", ANALYZE_ROUTE);
    info!("   - GET  {}", HEALTH_ROUTE);
    info!("🔍 Recognition backend: {}", mode);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("🛑 Shutdown signal received");
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        mode: state.backend.mode().to_string(),
        version: crate::version::VERSION_NUMBER.to_string(),
    })
}
