// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::vision::{ImageError, RecognitionError};

/// The only failure message callers ever see
pub const ANALYZE_FAILURE_MESSAGE: &str = "Failed to analyze image";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Anything that can go wrong while serving an analysis request
///
/// All variants collapse to the same 500 response; the cause is only logged.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] ImageError),

    #[error("Text detection failed: {0}")]
    Recognition(#[from] RecognitionError),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ANALYZE_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<JsonRejection> for AnalyzeError {
    fn from(rejection: JsonRejection) -> Self {
        AnalyzeError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        error!("❌ Error processing image: {}", self);
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
