// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Runtime configuration for the relay

use anyhow::Context;
use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Request body limit (50MB); full-resolution phone photos arrive base64-encoded
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Settings for the remote recognition client
#[derive(Clone)]
pub struct VisionConfig {
    /// Service-account JSON blob; `None` selects degraded mode
    pub credentials: Option<String>,
    /// Quota project sent as `x-goog-user-project`
    pub project_id: Option<String>,
    /// Base URL of the Vision REST API
    pub endpoint: String,
    /// Timeout for each outbound request
    pub request_timeout: Duration,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            project_id: None,
            endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionConfig")
            .field("credentials", &self.credentials.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub vision: VisionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            vision: VisionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    ///
    /// `host` may be an IPv4 or IPv6 literal or a hostname; the first resolved
    /// address wins.
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid bind host '{}'", self.host))?
            .next()
            .with_context(|| format!("Bind host '{}' resolved to no addresses", self.host))
    }
}
