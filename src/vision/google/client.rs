// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cloud Vision REST client for `TEXT_DETECTION`

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::auth::ServiceAccountTokenProvider;
use super::credentials::{CredentialInitError, ServiceAccountKey};
use crate::config::VisionConfig;
use crate::vision::annotations::{TextAnnotation, Vertex};
use crate::vision::image_utils::encode_base64;
use crate::vision::recognizer::{RecognitionError, TextRecognizer};

const TEXT_DETECTION: &str = "TEXT_DETECTION";

// --- images:annotate wire types ---

#[derive(Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature {
    r#type: &'static str,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    error: Option<ApiStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityAnnotation {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    bounding_poly: Option<BoundingPoly>,
}

#[derive(Deserialize)]
struct BoundingPoly {
    #[serde(default)]
    vertices: Vec<WireVertex>,
}

// Zero coordinates are omitted on the wire
#[derive(Deserialize)]
struct WireVertex {
    #[serde(default)]
    x: i64,
    #[serde(default)]
    y: i64,
}

#[derive(Deserialize)]
struct ApiStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl AnnotateRequest {
    fn text_detection(image: &[u8]) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: encode_base64(image),
                },
                features: vec![Feature {
                    r#type: TEXT_DETECTION,
                }],
            }],
        }
    }
}

impl EntityAnnotation {
    fn into_annotation(self) -> TextAnnotation {
        TextAnnotation {
            text: self.description,
            polygon: self.bounding_poly.map(|poly| {
                poly.vertices
                    .into_iter()
                    .map(|v| Vertex::new(v.x, v.y))
                    .collect()
            }),
        }
    }
}

impl AnnotateResponse {
    fn into_annotations(self) -> Result<Vec<TextAnnotation>, RecognitionError> {
        let image_response = self.responses.into_iter().next().ok_or_else(|| {
            RecognitionError::MalformedResponse("response contained no results".to_string())
        })?;

        if let Some(status) = image_response.error {
            if status.code != 0 {
                return Err(RecognitionError::Api {
                    code: status.code,
                    message: status.message,
                });
            }
        }

        Ok(image_response
            .text_annotations
            .into_iter()
            .map(EntityAnnotation::into_annotation)
            .collect())
    }
}

/// Text detection backed by the Cloud Vision API
pub struct GoogleVisionClient {
    http: Client,
    endpoint: String,
    project_id: Option<String>,
    auth: ServiceAccountTokenProvider,
}

impl GoogleVisionClient {
    /// Build a client from configuration
    ///
    /// Fails when credentials are absent or unusable; callers fall back to
    /// degraded mode.
    pub fn new(config: &VisionConfig) -> Result<Self, CredentialInitError> {
        let blob = config
            .credentials
            .as_deref()
            .ok_or(CredentialInitError::Missing)?;
        let key = ServiceAccountKey::from_json(blob)?;

        let http = Client::builder().timeout(config.request_timeout).build()?;
        let auth = ServiceAccountTokenProvider::new(key, http.clone())?;
        let endpoint = config.endpoint.trim_end_matches('/').to_string();

        info!(
            "Vision client configured: endpoint={}, service_account={}",
            endpoint,
            auth.client_email()
        );

        Ok(Self {
            http,
            endpoint,
            project_id: config.project_id.clone(),
            auth,
        })
    }

    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.endpoint)
    }
}

#[async_trait]
impl TextRecognizer for GoogleVisionClient {
    async fn text_detect(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, RecognitionError> {
        let token = self.auth.access_token().await?;

        let mut request = self
            .http
            .post(self.annotate_url())
            .bearer_auth(token)
            .json(&AnnotateRequest::text_detection(image));

        if let Some(project_id) = &self.project_id {
            request = request.header("x-goog-user-project", project_id);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecognitionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::MalformedResponse(e.to_string()))?;

        let annotations = parsed.into_annotations()?;
        debug!("Vision returned {} text annotations", annotations.len());
        Ok(annotations)
    }
}
