// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service-account credentials for the Cloud Vision client

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Default OAuth2 token endpoint for service accounts
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Why a live recognition client could not be built
///
/// Recovered at startup by switching to degraded mode; never reaches callers.
#[derive(Debug, Error)]
pub enum CredentialInitError {
    #[error("Missing Google Cloud Vision credentials")]
    Missing,

    #[error("Credentials are not a valid service account key: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported credential type '{0}', expected 'service_account'")]
    UnsupportedType(String),

    #[error("Credential field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Invalid private key: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// Service-account key as downloaded from the cloud console
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Parse a key from its JSON text
    pub fn from_json(blob: &str) -> Result<Self, CredentialInitError> {
        let blob = blob.trim();
        if blob.is_empty() {
            return Err(CredentialInitError::Missing);
        }

        let key: ServiceAccountKey = serde_json::from_str(blob)?;

        if let Some(kind) = key.key_type.as_deref() {
            if kind != "service_account" {
                return Err(CredentialInitError::UnsupportedType(kind.to_string()));
            }
        }
        if key.client_email.trim().is_empty() {
            return Err(CredentialInitError::EmptyField("client_email"));
        }
        if key.private_key.trim().is_empty() {
            return Err(CredentialInitError::EmptyField("private_key"));
        }
        if key.token_uri.trim().is_empty() {
            return Err(CredentialInitError::EmptyField("token_uri"));
        }

        Ok(key)
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
