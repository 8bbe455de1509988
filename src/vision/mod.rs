// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module
//!
//! This module provides:
//! - Base64 / data-URL payload decoding
//! - The `TextRecognizer` seam over a remote text-detection service
//! - A Google Cloud Vision implementation of that seam
//! - Backend selection with a degraded stub mode for missing credentials

pub mod annotations;
pub mod backend;
pub mod google;
pub mod image_utils;
pub mod recognizer;

pub use annotations::{extract_regions, BoundingBox, DetectedText, TextAnnotation, Vertex};
pub use backend::{stub_detection, RecognitionBackend};
pub use image_utils::{decode_base64_payload, extract_payload, ImageError};
pub use recognizer::{RecognitionError, TextRecognizer};
