//! Analyze endpoint tests
//!
//! Validation and availability paths only; the live model call is not
//! exercised here.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use eyeguide_node::api::http_server::{create_app, AppState};
use tower::util::ServiceExt;

async fn post_analyze(body: serde_json::Value) -> axum::response::Response {
    let app = create_app(AppState::new_for_test());
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/v1/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_missing_image_returns_400() {
    let response = post_analyze(serde_json::json!({ "task": "scene" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("image is required"));
}

#[tokio::test]
async fn test_missing_task_returns_400() {
    let response = post_analyze(serde_json::json!({ "image": "dGVzdA==" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_task_returns_400() {
    let response =
        post_analyze(serde_json::json!({ "image": "dGVzdA==", "task": "detect" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("unknown task"));
}

#[tokio::test]
async fn test_unsupported_format_returns_400() {
    let response = post_analyze(
        serde_json::json!({ "image": "dGVzdA==", "task": "scene", "format": "webp" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unconfigured_analysis_returns_503() {
    // Valid request, but the test state carries no model credential
    let response =
        post_analyze(serde_json::json!({ "image": "dGVzdA==", "task": "scene" })).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("Remote analysis not configured"));
}

#[tokio::test]
async fn test_each_task_name_is_accepted() {
    // All three tasks pass validation and reach the availability check
    for task in ["scene", "obstacles", "assistance"] {
        let response =
            post_analyze(serde_json::json!({ "image": "dGVzdA==", "task": task })).await;
        assert_eq!(
            response.status(),
            StatusCode::SERVICE_UNAVAILABLE,
            "task {} should pass validation",
            task
        );
    }
}
