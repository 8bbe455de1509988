// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the game vision relay

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-text-detection-2025-10-18";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-10-18";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "text-detection",
    "data-url-payloads",
    "service-account-auth",
    "degraded-stub-mode",
    "cors-any-origin",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Game Vision Relay {} ({})", VERSION_NUMBER, BUILD_DATE)
}
