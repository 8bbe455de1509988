// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text annotations returned by a recognizer and their projection into
//! axis-aligned regions

use serde::{Deserialize, Serialize};

/// A polygon vertex in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A unit of recognized text plus its bounding polygon
///
/// Either part may be missing in what the remote service returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextAnnotation {
    pub text: Option<String>,
    pub polygon: Option<Vec<Vertex>>,
}

impl TextAnnotation {
    pub fn new(text: impl Into<String>, polygon: Vec<Vertex>) -> Self {
        Self {
            text: Some(text.into()),
            polygon: Some(polygon),
        }
    }
}

/// Axis-aligned rectangle in image pixels; all fields non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Minimal enclosing rectangle of `vertices`, or `None` for an empty polygon.
    ///
    /// Negative coordinates clamp to the image edge.
    pub fn enclosing(vertices: &[Vertex]) -> Option<Self> {
        let first = vertices.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for v in &vertices[1..] {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }

        let x = min_x.max(0);
        let y = min_y.max(0);

        Some(Self {
            x: saturate(x),
            y: saturate(y),
            width: saturate(max_x - x),
            height: saturate(max_y - y),
        })
    }
}

fn saturate(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// Text with a usable bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedText {
    pub text: String,
    pub bounding_box: BoundingBox,
}

/// Turn raw annotations into detected text regions.
///
/// The first annotation is the whole-image aggregate and is dropped. Entries
/// without text or without a non-empty polygon are skipped. Order is preserved.
pub fn extract_regions(annotations: Vec<TextAnnotation>) -> Vec<DetectedText> {
    annotations
        .into_iter()
        .skip(1)
        .filter_map(|annotation| {
            let text = annotation.text.filter(|t| !t.is_empty())?;
            let bounding_box = BoundingBox::enclosing(annotation.polygon.as_deref()?)?;
            Some(DetectedText { text, bounding_box })
        })
        .collect()
}
