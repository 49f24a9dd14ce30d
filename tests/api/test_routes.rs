//! Route registration tests
//!
//! Verify that every route from the spec surface exists, that the
//! presentation page is served at the root, and that the health check
//! reports service availability.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use eyeguide_node::api::http_server::{create_app, AppState};
use tower::util::ServiceExt; // for `oneshot`

#[tokio::test]
async fn test_index_page_served() {
    let app = create_app(AppState::new_for_test());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("EyeGuide"));
    assert!(html.contains("/v1/extract-text"));
}

#[tokio::test]
async fn test_health_reports_availability() {
    let app = create_app(AppState::new_for_test());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
    // Test state has no remote credentials configured
    assert_eq!(health["analysis"], false);
    assert_eq!(health["speech"], false);
    assert!(health["ocrEngine"].is_string());
}

#[tokio::test]
async fn test_analyze_rejects_get() {
    let app = create_app(AppState::new_for_test());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/v1/analyze")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_404() {
    let app = create_app(AppState::new_for_test());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/v1/describe-image")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
