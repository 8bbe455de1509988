// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Cloud Vision recognizer
//!
//! Credentials are a service-account JSON blob kept in memory; access tokens
//! come from the OAuth2 JWT-bearer grant and are cached until shortly before
//! they expire.

pub mod auth;
pub mod client;
pub mod credentials;

pub use auth::{ServiceAccountTokenProvider, VISION_SCOPE};
pub use client::GoogleVisionClient;
pub use credentials::{CredentialInitError, ServiceAccountKey, DEFAULT_TOKEN_URI};
