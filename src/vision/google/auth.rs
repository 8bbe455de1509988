// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OAuth2 access tokens for a service account (JWT bearer grant)

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use super::credentials::{CredentialInitError, ServiceAccountKey};
use crate::vision::recognizer::RecognitionError;

/// OAuth2 scope for the Vision API
pub const VISION_SCOPE: &str = "https://www.googleapis.com/auth/cloud-vision";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each assertion (the maximum Google accepts)
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before they expire
const EXPIRY_SKEW_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_SKEW_SECS) < self.expires_at
    }
}

/// Mints and caches access tokens for one service account
///
/// The PEM text is parsed once into a signing key; the key struct itself is
/// dropped after construction.
pub struct ServiceAccountTokenProvider {
    http: Client,
    client_email: String,
    key_id: Option<String>,
    token_uri: String,
    signing_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(key: ServiceAccountKey, http: Client) -> Result<Self, CredentialInitError> {
        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;

        Ok(Self {
            http,
            client_email: key.client_email,
            key_id: key.private_key_id,
            token_uri: key.token_uri,
            signing_key,
            cached: Mutex::new(None),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Return a valid access token, exchanging a fresh assertion if needed.
    ///
    /// Concurrent callers wait on the same exchange instead of issuing their own.
    pub async fn access_token(&self) -> Result<String, RecognitionError> {
        let mut cached = self.cached.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(now)) {
            return Ok(token.value.clone());
        }

        let token = self.exchange(now).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    fn assertion(&self, now: DateTime<Utc>) -> Result<String, RecognitionError> {
        let iat = now.timestamp();
        let claims = Claims {
            iss: &self.client_email,
            scope: VISION_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key_id.clone();

        Ok(jsonwebtoken::encode(&header, &claims, &self.signing_key)?)
    }

    async fn exchange(&self, now: DateTime<Utc>) -> Result<CachedToken, RecognitionError> {
        let assertion = self.assertion(now)?;
        debug!("Exchanging service account assertion at {}", self.token_uri);

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecognitionError::TokenExchange(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::TokenExchange(e.to_string()))?;

        Ok(CachedToken {
            value: token.access_token,
            expires_at: token_expiry(now, token.expires_in),
        })
    }
}

/// Expiry for a freshly issued token
///
/// `expires_in` is clamped to the assertion lifetime; tokens never outlive it.
fn token_expiry(now: DateTime<Utc>, expires_in: Option<i64>) -> DateTime<Utc> {
    let lifetime = expires_in
        .unwrap_or(ASSERTION_LIFETIME_SECS)
        .clamp(0, ASSERTION_LIFETIME_SECS);
    now + Duration::seconds(lifetime)
}
