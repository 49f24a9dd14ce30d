//! Speak endpoint tests
//!
//! Validation and availability paths; live synthesis is not exercised.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use eyeguide_node::api::http_server::{create_app, AppState};
use tower::util::ServiceExt;

async fn post_speak(body: serde_json::Value) -> axum::response::Response {
    let app = create_app(AppState::new_for_test());
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/v1/speak")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_missing_text_returns_400() {
    let response = post_speak(serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("text is required"));
}

#[tokio::test]
async fn test_blank_text_returns_400() {
    let response = post_speak(serde_json::json!({ "text": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unconfigured_speech_returns_503() {
    let response = post_speak(serde_json::json!({ "text": "Door ahead on the right." })).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("Speech synthesis not configured"));
}
