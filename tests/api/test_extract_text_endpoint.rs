//! Extract-text endpoint tests
//!
//! Validation and failure paths; a live Tesseract installation is not
//! assumed, so the OCR engine is pointed at a nonexistent executable to
//! exercise the failure mapping deterministically.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eyeguide_node::api::http_server::{create_app, AppState};
use eyeguide_node::vision::TesseractOcr;
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_png_base64(width: u32, height: u32) -> String {
    let image = image::DynamicImage::new_rgb8(width, height);
    let mut buffer = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    STANDARD.encode(buffer.into_inner())
}

/// State whose OCR engine cannot exist on any host.
fn state_with_bogus_ocr() -> AppState {
    let mut state = AppState::new_for_test();
    state.ocr = Arc::new(TesseractOcr::new("/nonexistent/tesseract-bin", "eng"));
    state
}

async fn post_extract(state: AppState, body: serde_json::Value) -> axum::response::Response {
    let app = create_app(state);
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/v1/extract-text")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_missing_image_returns_400() {
    let response = post_extract(AppState::new_for_test(), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_base64_returns_400() {
    let response = post_extract(
        AppState::new_for_test(),
        serde_json::json!({ "image": "not-valid-base64!!!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corrupt_image_rejected_before_ocr() {
    // Decode failure happens before the (bogus) OCR engine would run, so
    // the status is 400, not 500
    let corrupt = STANDARD.encode([0xFF, 0xD8, 0xFF, 0x00, 0x01]);
    let response = post_extract(state_with_bogus_ocr(), serde_json::json!({ "image": corrupt }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_ocr_engine_returns_500() {
    let response = post_extract(
        state_with_bogus_ocr(),
        serde_json::json!({ "image": test_png_base64(32, 32) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("OCR failed"));
}
