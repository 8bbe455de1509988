// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analysis request type

use serde::{Deserialize, Serialize};

/// Request for text detection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw base64 or a data URL; only the text after the last comma is decoded.
    /// A missing field reads as empty.
    #[serde(default)]
    pub image: String,
}

impl AnalysisRequest {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}
