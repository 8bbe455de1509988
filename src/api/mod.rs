// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod errors;
pub mod http_server;

pub use analyze::{analyze_handler, AnalysisRequest, AnalysisResponse, DetectedRegion};
pub use errors::{AnalyzeError, ErrorResponse, ANALYZE_FAILURE_MESSAGE};
pub use http_server::{create_app, create_app_with_limit, start_server, AppState, HealthResponse};
