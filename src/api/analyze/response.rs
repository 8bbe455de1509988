// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analysis response types

use serde::{Deserialize, Serialize};

pub use crate::vision::BoundingBox;
use crate::vision::DetectedText;

/// Confidence reported for every detection.
///
/// Text detection yields no per-region score, so a fixed value is reported.
pub const DETECTION_CONFIDENCE: f64 = 0.95;

/// A detected game title candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedRegion {
    /// Recognized text
    pub title: String,
    /// Always [`DETECTION_CONFIDENCE`]
    pub confidence: f64,
    /// Bounding box location
    pub bounding_box: BoundingBox,
}

impl From<DetectedText> for DetectedRegion {
    fn from(detected: DetectedText) -> Self {
        Self {
            title: detected.text,
            confidence: DETECTION_CONFIDENCE,
            bounding_box: detected.bounding_box,
        }
    }
}

/// Response from image analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Detections in the order the recognizer returned them
    pub detected_games: Vec<DetectedRegion>,
}

impl AnalysisResponse {
    pub fn from_detections(detections: Vec<DetectedText>) -> Self {
        Self {
            detected_games: detections.into_iter().map(DetectedRegion::from).collect(),
        }
    }
}
