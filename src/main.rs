// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use game_vision_relay::{
    api::{start_server, AppState},
    cli::ServerCli,
    config::ServerConfig,
    version,
    vision::RecognitionBackend,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads the environment
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("🔄 Initializing Vision API server...");
    tracing::info!("📦 {}", version::get_version_string());
    tracing::info!("📦 BUILD VERSION: {}", version::VERSION);
    tracing::info!("✨ Features: {}", version::FEATURES.join(", "));

    let config: ServerConfig = ServerCli::parse().into();
    tracing::debug!("Configuration: {:?}", config);

    // Credential problems select degraded mode here; they never stop startup
    let backend = RecognitionBackend::from_config(&config.vision);

    if let Err(e) = start_server(config, AppState::new(backend)).await {
        tracing::error!("❌ Failed to start Vision API server: {}", e);
        return Err(e);
    }

    Ok(())
}
