// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Remote text recognition capability

use async_trait::async_trait;
use thiserror::Error;

use super::annotations::TextAnnotation;

/// Failures talking to a remote recognizer
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("Failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Recognition service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Recognition service error {code}: {message}")]
    Api { code: i32, message: String },

    #[error("Malformed recognition response: {0}")]
    MalformedResponse(String),
}

/// Anything that can find text in an image
///
/// Annotation order is significant: the first entry is the aggregate of all
/// text in the image, later entries are individual regions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Run text detection on raw (encoded) image bytes
    async fn text_detect(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, RecognitionError>;
}
