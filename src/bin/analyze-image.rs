// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use game_vision_relay::{
    api::analyze::{analyze_image, AnalysisRequest},
    cli::AnalyzeImageCli,
    config::VisionConfig,
    vision::{image_utils::encode_base64, RecognitionBackend},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = AnalyzeImageCli::parse();

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: AnalyzeImageCli) -> Result<()> {
    let bytes = tokio::fs::read(&cli.path)
        .await
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let request = AnalysisRequest::new(encode_base64(&bytes));

    let config: VisionConfig = cli.vision.into();
    let backend = RecognitionBackend::from_config(&config);
    if backend.is_degraded() {
        eprintln!("⚠️  No usable credentials, printing stub detections");
    }

    let response = analyze_image(&backend, &request.image)
        .await
        .context("failed to analyze image")?;

    let json = if cli.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{}", json);
    Ok(())
}
