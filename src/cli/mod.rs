// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Command-line and environment arguments

use clap::{Args, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    ServerConfig, VisionConfig, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_VISION_ENDPOINT,
};

/// Remote recognition settings shared by every binary
#[derive(Args, Debug, Clone)]
pub struct VisionArgs {
    /// Service account key JSON (absent or invalid: stub detections)
    #[arg(long, env = "GOOGLE_CLOUD_VISION_CREDENTIALS", hide_env_values = true)]
    pub credentials: Option<String>,

    /// Quota project for Vision API calls
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Vision REST API base URL
    #[arg(long, env = "VISION_API_ENDPOINT", default_value = DEFAULT_VISION_ENDPOINT)]
    pub vision_endpoint: String,

    /// Timeout for each Vision API request, in seconds
    #[arg(long, env = "VISION_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl From<VisionArgs> for VisionConfig {
    fn from(args: VisionArgs) -> Self {
        VisionConfig {
            credentials: args.credentials.filter(|c| !c.trim().is_empty()),
            project_id: args.project_id.filter(|p| !p.trim().is_empty()),
            endpoint: args.vision_endpoint,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
        }
    }
}

/// Game vision relay server
#[derive(Parser, Debug)]
#[command(name = "game-vision-relay")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Relays board game shelf photos to Cloud Vision text detection", long_about = None)]
pub struct ServerCli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum accepted request body, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[command(flatten)]
    pub vision: VisionArgs,
}

impl From<ServerCli> for ServerConfig {
    fn from(cli: ServerCli) -> Self {
        ServerConfig {
            host: cli.host,
            port: cli.port,
            max_body_bytes: cli.max_body_bytes,
            vision: cli.vision.into(),
        }
    }
}

/// Run text detection on a local image and print the response JSON
#[derive(Parser, Debug)]
#[command(name = "analyze-image")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Detect game titles in a local image", long_about = None)]
pub struct AnalyzeImageCli {
    /// Image file to analyze
    pub path: PathBuf,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub vision: VisionArgs,
}
