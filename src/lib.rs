// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod version;
pub mod vision;

// Re-export main types
pub use api::{create_app, start_server, AnalysisRequest, AnalysisResponse, AppState};
pub use config::{ServerConfig, VisionConfig};
pub use vision::{RecognitionBackend, TextRecognizer};
