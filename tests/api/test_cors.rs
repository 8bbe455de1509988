// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! CORS tests: any origin may call the analyze endpoint

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use game_vision_relay::api::http_server::{create_app, AppState};
use tower::ServiceExt;

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/vision/analyze")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = create_app(AppState::new_for_test())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_post_response_carries_allow_origin() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vision/analyze")
        .header(header::ORIGIN, "https://shelf.example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"image": "dGVzdA=="}"#))
        .unwrap();

    let response = create_app(AppState::new_for_test())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_error_response_carries_allow_origin() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vision/analyze")
        .header(header::ORIGIN, "https://shelf.example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"image": "!!!"}"#))
        .unwrap();

    let response = create_app(AppState::new_for_test())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
