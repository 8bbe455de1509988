// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image analysis endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info};

use super::request::AnalysisRequest;
use super::response::AnalysisResponse;
use crate::api::errors::AnalyzeError;
use crate::api::http_server::AppState;
use crate::vision::{decode_base64_payload, RecognitionBackend};

/// POST /api/vision/analyze - Detect game titles in an image
///
/// # Request
/// - `image`: Base64 image data, optionally as a data URL
///
/// # Response
/// - `detectedGames`: one entry per recognized text region, each with
///   `title`, `confidence` (always 0.95) and `boundingBox`
///
/// # Errors
/// - 500 Internal Server Error with `{"error": "Failed to analyze image"}` for
///   any failure: unreadable body, invalid base64, or a recognizer error
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AnalyzeError> {
    let Json(request) = payload?;
    info!("📸 Processing image analysis request...");
    debug!(
        "Payload: {} chars, backend: {}",
        request.image.len(),
        state.backend.mode()
    );

    let response = analyze_image(&state.backend, &request.image).await?;

    info!(
        "✅ Detected {} potential games in image",
        response.detected_games.len()
    );
    Ok(Json(response))
}

/// Decode `image` and run it through `backend`.
///
/// Decoding happens first in every mode, so an invalid payload fails even
/// when the backend is degraded.
pub async fn analyze_image(
    backend: &RecognitionBackend,
    image: &str,
) -> Result<AnalysisResponse, AnalyzeError> {
    let bytes = decode_base64_payload(image)?;
    debug!("Decoded image payload: {} bytes", bytes.len());

    let detections = backend.detect(&bytes).await?;
    Ok(AnalysisResponse::from_detections(detections))
}
