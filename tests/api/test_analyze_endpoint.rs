// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /api/vision/analyze
//!
//! These tests drive the full router with `oneshot` and verify:
//! - Degraded mode answers every valid payload with the stub detection
//! - Data-URL and raw base64 payloads reach the recognizer as the same bytes
//! - The aggregate annotation and incomplete annotations are dropped
//! - Every failure maps to 500 with the generic error body

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use game_vision_relay::{
    api::http_server::{create_app, create_app_with_limit, AppState},
    AnalysisRequest,
    vision::{RecognitionBackend, RecognitionError, TextAnnotation, TextRecognizer, Vertex},
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for `oneshot`

// 1x1 red PNG - minimal valid image
const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

/// Recognizer that replays a fixed annotation list and records what it saw
#[derive(Clone, Default)]
struct ScriptedRecognizer {
    annotations: Vec<TextAnnotation>,
    seen: Arc<Mutex<Vec<Vec<u8>>>>,
}

#[async_trait]
impl TextRecognizer for ScriptedRecognizer {
    async fn text_detect(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, RecognitionError> {
        self.seen.lock().unwrap().push(image.to_vec());
        Ok(self.annotations.clone())
    }
}

struct FailingRecognizer;

#[async_trait]
impl TextRecognizer for FailingRecognizer {
    async fn text_detect(&self, _image: &[u8]) -> Result<Vec<TextAnnotation>, RecognitionError> {
        Err(RecognitionError::Status {
            status: 403,
            body: "Cloud Vision API has not been used in project".to_string(),
        })
    }
}

fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<Vertex> {
    vec![
        Vertex::new(x0, y0),
        Vertex::new(x1, y0),
        Vertex::new(x1, y1),
        Vertex::new(x0, y1),
    ]
}

/// Helper: router with a scripted live recognizer
fn live_app(recognizer: ScriptedRecognizer) -> Router {
    create_app(AppState::new(RecognitionBackend::live(recognizer)))
}

/// Helper: router in degraded mode
fn degraded_app() -> Router {
    create_app(AppState::new_for_test())
}

/// Helper: POST a raw body and return status plus parsed JSON
async fn post_analyze(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vision/analyze")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn image_body(image: &str) -> String {
    serde_json::to_string(&AnalysisRequest::new(image)).unwrap()
}

fn generic_failure() -> Value {
    json!({"error": "Failed to analyze image"})
}

#[cfg(test)]
mod degraded_mode_tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_for_raw_base64() {
        let (status, body) = post_analyze(degraded_app(), image_body(TINY_PNG_BASE64)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "detectedGames": [{
                    "title": "Catan",
                    "confidence": 0.95,
                    "boundingBox": {"x": 100, "y": 100, "width": 100, "height": 50}
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_stub_identical_for_any_valid_payload() {
        let payloads = [
            TINY_PNG_BASE64.to_string(),
            format!("data:image/png;base64,{}", TINY_PNG_BASE64),
            "dGVzdA==".to_string(),
            String::new(),
        ];

        let (_, expected) = post_analyze(degraded_app(), image_body(TINY_PNG_BASE64)).await;
        for payload in payloads {
            let (status, body) = post_analyze(degraded_app(), image_body(&payload)).await;
            assert_eq!(status, StatusCode::OK, "payload {:?}", payload);
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn test_missing_image_field_uses_stub() {
        let (status, body) = post_analyze(degraded_app(), "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detectedGames"][0]["title"], "Catan");
    }

    #[tokio::test]
    async fn test_malformed_base64_is_generic_500() {
        let (status, body) = post_analyze(degraded_app(), image_body("not-valid-base64!!!")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, generic_failure());
    }
}

#[cfg(test)]
mod live_mode_tests {
    use super::*;

    #[tokio::test]
    async fn test_data_url_and_raw_send_same_bytes() {
        let recognizer = ScriptedRecognizer::default();
        let seen = recognizer.seen.clone();

        let (status, _) = post_analyze(live_app(recognizer.clone()), image_body(TINY_PNG_BASE64)).await;
        assert_eq!(status, StatusCode::OK);
        let data_url = format!("data:image/png;base64,{}", TINY_PNG_BASE64);
        let (status, _) = post_analyze(live_app(recognizer), image_body(&data_url)).await;
        assert_eq!(status, StatusCode::OK);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(&seen[0][..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_first_annotation_never_reflected() {
        let recognizer = ScriptedRecognizer {
            annotations: vec![
                TextAnnotation::new("Catan\nAzul\nWingspan", square(0, 0, 640, 480)),
                TextAnnotation::new("Catan", square(10, 20, 50, 60)),
                TextAnnotation::new("Azul", square(100, 20, 160, 45)),
                TextAnnotation::new("Wingspan", square(200, 300, 320, 340)),
            ],
            ..Default::default()
        };

        let (status, body) = post_analyze(live_app(recognizer), image_body(TINY_PNG_BASE64)).await;
        assert_eq!(status, StatusCode::OK);

        let games = body["detectedGames"].as_array().unwrap();
        assert_eq!(games.len(), 3);
        let titles: Vec<&str> = games.iter().map(|g| g["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["Catan", "Azul", "Wingspan"]);
        assert!(games.iter().all(|g| g["confidence"] == 0.95));
        assert_eq!(
            games[0]["boundingBox"],
            json!({"x": 10, "y": 20, "width": 40, "height": 40})
        );
    }

    #[tokio::test]
    async fn test_incomplete_annotations_dropped() {
        let recognizer = ScriptedRecognizer {
            annotations: vec![
                TextAnnotation::new("Ticket to Ride", square(0, 0, 400, 100)),
                TextAnnotation {
                    text: Some("Ticket".to_string()),
                    polygon: None,
                },
                TextAnnotation {
                    text: None,
                    polygon: Some(square(5, 5, 10, 10)),
                },
                TextAnnotation::new("Ride", square(300, 10, 380, 60)),
            ],
            ..Default::default()
        };

        let (status, body) = post_analyze(live_app(recognizer), image_body(TINY_PNG_BASE64)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "detectedGames": [{
                    "title": "Ride",
                    "confidence": 0.95,
                    "boundingBox": {"x": 300, "y": 10, "width": 80, "height": 50}
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_no_text_found() {
        let (status, body) =
            post_analyze(live_app(ScriptedRecognizer::default()), image_body(TINY_PNG_BASE64)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"detectedGames": []}));
    }

    #[tokio::test]
    async fn test_recognizer_failure_is_generic_500() {
        let app = create_app(AppState::new(RecognitionBackend::live(FailingRecognizer)));
        let (status, body) = post_analyze(app, image_body(TINY_PNG_BASE64)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, generic_failure());
    }

    #[tokio::test]
    async fn test_malformed_base64_skips_recognizer() {
        let recognizer = ScriptedRecognizer::default();
        let seen = recognizer.seen.clone();

        let (status, body) = post_analyze(live_app(recognizer), image_body("@@@@")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, generic_failure());
        assert!(seen.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod request_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_non_json_body_is_generic_500() {
        let (status, body) = post_analyze(degraded_app(), "this is not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, generic_failure());
    }

    #[tokio::test]
    async fn test_wrong_image_type_is_generic_500() {
        let (status, body) = post_analyze(degraded_app(), r#"{"image": 42}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, generic_failure());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_generic_500() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/vision/analyze")
            .body(Body::from(image_body(TINY_PNG_BASE64)))
            .unwrap();

        let response = degraded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_body_over_limit_is_generic_500() {
        let app = create_app_with_limit(AppState::new_for_test(), 64);
        let (status, body) = post_analyze(app, image_body(&"A".repeat(1024))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, generic_failure());
    }

    #[tokio::test]
    async fn test_get_not_allowed() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/vision/analyze")
            .body(Body::empty())
            .unwrap();

        let response = degraded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/v1/ocr")
            .body(Body::empty())
            .unwrap();

        let response = degraded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
