// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image analysis endpoint module
//!
//! Provides POST /api/vision/analyze for detecting game titles in a photo.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{analyze_handler, analyze_image};
pub use request::AnalysisRequest;
pub use response::{AnalysisResponse, BoundingBox, DetectedRegion, DETECTION_CONFIDENCE};
