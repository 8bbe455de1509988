// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recognition backend selected once at startup

use std::sync::Arc;

use crate::config::VisionConfig;
use crate::vision::annotations::{extract_regions, BoundingBox, DetectedText};
use crate::vision::google::GoogleVisionClient;
use crate::vision::recognizer::{RecognitionError, TextRecognizer};

/// Title reported by the degraded-mode stub
pub const STUB_TITLE: &str = "Catan";

/// The detection returned for every request in degraded mode
pub fn stub_detection() -> DetectedText {
    DetectedText {
        text: STUB_TITLE.to_string(),
        bounding_box: BoundingBox {
            x: 100,
            y: 100,
            width: 100,
            height: 50,
        },
    }
}

/// Where detections come from
///
/// `Degraded` is used when no recognizer could be built (typically missing
/// credentials during local development) and answers every request with
/// [`stub_detection`].
#[derive(Clone)]
pub enum RecognitionBackend {
    Live(Arc<dyn TextRecognizer>),
    Degraded,
}

impl RecognitionBackend {
    /// Build the Cloud Vision backend, falling back to degraded mode on any
    /// credential or client construction failure
    pub fn from_config(config: &VisionConfig) -> Self {
        match GoogleVisionClient::new(config) {
            Ok(client) => {
                tracing::info!("✅ Vision API client initialized");
                Self::Live(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!("⚠️ Error initializing Vision API client: {}", e);
                tracing::warn!("   Serving stub detections until credentials are provided");
                Self::Degraded
            }
        }
    }

    /// Wrap an existing recognizer
    pub fn live(recognizer: impl TextRecognizer + 'static) -> Self {
        Self::Live(Arc::new(recognizer))
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded)
    }

    /// `"live"` or `"degraded"`
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Live(_) => "live",
            Self::Degraded => "degraded",
        }
    }

    /// Detect text regions in raw image bytes
    pub async fn detect(&self, image: &[u8]) -> Result<Vec<DetectedText>, RecognitionError> {
        match self {
            Self::Live(recognizer) => {
                let annotations = recognizer.text_detect(image).await?;
                Ok(extract_regions(annotations))
            }
            Self::Degraded => Ok(vec![stub_detection()]),
        }
    }
}

impl std::fmt::Debug for RecognitionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mode())
    }
}
